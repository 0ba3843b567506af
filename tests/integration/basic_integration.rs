/// Basic integration tests
use habit_core::*;

#[cfg(test)]
mod basic_integration_tests {
    use super::*;

    fn create_params(name: &str, kind: &str) -> CreateHabitParams {
        CreateHabitParams {
            name: name.to_string(),
            kind: kind.to_string(),
            period: "daily".to_string(),
            times: 1,
            target_value: None,
            target_unit: None,
            milestones: Vec::new(),
        }
    }

    #[test]
    fn test_create_log_status_workflow() {
        let tracker = HabitTracker::in_memory();

        let created = tracker
            .create_habit(create_params("Meditate", "binary"))
            .expect("Failed to create habit");

        let logged = tracker
            .log_progress(LogProgressParams {
                habit_id: created.habit_id.clone(),
                value: 1.0,
                unit: None,
                logged_at: None,
            })
            .expect("Failed to log progress");
        assert_eq!(logged.current_streak, 1);

        let status = tracker
            .habit_status(StatusParams {
                habit_id: Some(created.habit_id.clone()),
            })
            .expect("Failed to get status");
        assert_eq!(status.habits.len(), 1);
        assert!(status.habits[0].snapshot.completed_today);
        assert_eq!(status.habits[0].snapshot.today_progress, 100.0);
    }

    #[test]
    fn test_measurable_workflow_with_target_and_milestones() {
        let tracker = HabitTracker::in_memory();

        let created = tracker
            .create_habit(CreateHabitParams {
                name: "Morning Run".to_string(),
                kind: "measurable".to_string(),
                period: "daily".to_string(),
                times: 1,
                target_value: Some(5.0),
                target_unit: Some("km".to_string()),
                milestones: vec![
                    MilestoneParams { name: "First 100 km".to_string(), target: 100.0 },
                    MilestoneParams { name: "500 km club".to_string(), target: 500.0 },
                ],
            })
            .expect("Failed to create habit");

        // Half the target: day not yet completed
        tracker
            .log_progress(LogProgressParams {
                habit_id: created.habit_id.clone(),
                value: 2.5,
                unit: Some("km".to_string()),
                logged_at: None,
            })
            .expect("Failed to log progress");

        let status = tracker
            .habit_status(StatusParams { habit_id: Some(created.habit_id.clone()) })
            .expect("Failed to get status");
        let snapshot = &status.habits[0].snapshot;
        assert_eq!(snapshot.today_progress, 50.0);
        assert!(!snapshot.completed_today);
        assert_eq!(
            snapshot.next_milestone.as_ref().map(|m| m.name.as_str()),
            Some("First 100 km")
        );

        // Logging in a mismatched unit is rejected
        let mismatch = tracker.log_progress(LogProgressParams {
            habit_id: created.habit_id.clone(),
            value: 1.0,
            unit: Some("miles".to_string()),
            logged_at: None,
        });
        assert!(matches!(mismatch, Err(ServiceError::RuleViolation(_))));

        // The rest of the target completes the day
        tracker
            .log_progress(LogProgressParams {
                habit_id: created.habit_id.clone(),
                value: 2.5,
                unit: Some("KM".to_string()),
                logged_at: None,
            })
            .expect("Failed to log progress");

        let status = tracker
            .habit_status(StatusParams { habit_id: Some(created.habit_id) })
            .expect("Failed to get status");
        assert!(status.habits[0].snapshot.completed_today);
        assert_eq!(status.habits[0].snapshot.current_streak, 1);
    }

    #[test]
    fn test_archive_then_delete_lifecycle() {
        let tracker = HabitTracker::in_memory();
        let created = tracker
            .create_habit(create_params("Stretch", "binary"))
            .expect("Failed to create habit");

        tracker
            .log_progress(LogProgressParams {
                habit_id: created.habit_id.clone(),
                value: 1.0,
                unit: None,
                logged_at: None,
            })
            .expect("Failed to log progress");

        // Mark completed; deletion is now protected by its history
        tracker
            .update_habit(UpdateHabitParams {
                habit_id: created.habit_id.clone(),
                name: None,
                status: Some("completed".to_string()),
                kind: None,
                period: None,
                times: None,
                target_value: None,
                target_unit: None,
                clear_target: false,
                milestones: None,
                milestone_progress: None,
            })
            .expect("Failed to update habit");

        let delete = tracker.delete_habit(DeleteHabitParams {
            habit_id: created.habit_id.clone(),
        });
        assert!(matches!(delete, Err(ServiceError::RuleViolation(_))));

        // An ongoing habit with history deletes fine
        let second = tracker
            .create_habit(create_params("Short lived", "binary"))
            .expect("Failed to create habit");
        tracker
            .delete_habit(DeleteHabitParams { habit_id: second.habit_id })
            .expect("Failed to delete habit");

        let listed = tracker.list_habits(ListHabitsParams::default()).unwrap();
        assert_eq!(listed.count, 1);
    }

    #[test]
    fn test_snapshot_serializes() {
        let tracker = HabitTracker::in_memory();
        let created = tracker
            .create_habit(create_params("Meditate", "binary"))
            .expect("Failed to create habit");

        let status = tracker
            .habit_status(StatusParams { habit_id: Some(created.habit_id) })
            .expect("Failed to get status");

        let json = serde_json::to_string(&status.habits[0].snapshot).expect("Failed to serialize");
        let back: ProgressSnapshot = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, status.habits[0].snapshot);
    }

    #[test]
    fn test_habit_serde_roundtrip() {
        let habit = Habit::new(
            "Morning Run".to_string(),
            HabitKind::Measurable,
            Frequency::new(Period::Weekly, 3),
            Some(Target::new(5.0, Unit::Km)),
            vec![Milestone::new("First 100 km".to_string(), 100.0)],
        )
        .expect("Failed to create habit");

        let json = serde_json::to_string(&habit).expect("Failed to serialize");
        let back: Habit = serde_json::from_str(&json).expect("Failed to deserialize");
        assert_eq!(back, habit);
    }
}
