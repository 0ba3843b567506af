/// Business rules gating habit mutations
///
/// Stateless predicates, each pure and total over its inputs. A predicate
/// returning false means "do not apply this mutation" - translating that
/// into a user-facing error is the caller's job (see the service layer);
/// nothing here errors or panics.

use crate::domain::{milestone, Frequency, Habit, HabitKind, HabitLog, HabitStatus, Milestone};

/// Whether a progress entry may be logged against the habit
///
/// Rejected when the habit is archived, when the value does not fit the
/// habit kind (binary logs must be exactly 1, measurable logs positive), or
/// when a non-empty unit is supplied that differs case-insensitively from
/// the habit's target unit.
pub fn can_log_progress(habit: &Habit, value: f64, unit: Option<&str>) -> bool {
    if habit.status == HabitStatus::Archived {
        return false;
    }

    let value_ok = match habit.kind {
        HabitKind::Binary => value == 1.0,
        HabitKind::Measurable => value > 0.0,
    };
    if !value_ok {
        return false;
    }

    if let (Some(target), Some(unit)) = (&habit.target, unit) {
        let unit = unit.trim();
        if !unit.is_empty() && !unit.eq_ignore_ascii_case(target.unit.as_str()) {
            return false;
        }
    }

    true
}

/// Whether the habit may switch between binary and measurable tracking
///
/// Only pristine habits - those with no logged history - may change kind.
pub fn can_change_kind(logs: &[HabitLog]) -> bool {
    logs.is_empty()
}

/// Whether the habit may be deleted
///
/// Completed habits with logged history are protected; a habit with no
/// history may be deleted regardless of status.
pub fn can_delete(habit: &Habit, logs: &[HabitLog]) -> bool {
    !(habit.status == HabitStatus::Completed && !logs.is_empty())
}

/// Whether the frequency is within the allowed bounds
pub fn is_valid_frequency(frequency: &Frequency) -> bool {
    frequency.is_valid()
}

/// Whether a milestone sequence has strictly ascending targets
pub fn is_valid_milestone_progression(milestones: &[Milestone]) -> bool {
    milestone::strictly_ascending_targets(milestones)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{HabitId, Period, Target, Unit};
    use chrono::Utc;

    fn habit(kind: HabitKind, status: HabitStatus, target: Option<Target>) -> Habit {
        let mut habit = Habit::new(
            "Test Habit".to_string(),
            kind,
            Frequency::new(Period::Daily, 1),
            target,
            Vec::new(),
        )
        .unwrap();
        habit.status = status;
        habit
    }

    fn one_log(habit_id: HabitId) -> Vec<HabitLog> {
        vec![HabitLog::new(habit_id, 1.0, Utc::now()).unwrap()]
    }

    #[test]
    fn test_binary_log_value_must_be_one() {
        let habit = habit(HabitKind::Binary, HabitStatus::Ongoing, None);
        assert!(can_log_progress(&habit, 1.0, None));
        assert!(!can_log_progress(&habit, 2.0, None));
        assert!(!can_log_progress(&habit, 0.0, None));
    }

    #[test]
    fn test_measurable_log_value_must_be_positive() {
        let habit = habit(
            HabitKind::Measurable,
            HabitStatus::Ongoing,
            Some(Target::new(30.0, Unit::Minutes)),
        );
        assert!(can_log_progress(&habit, 15.0, None));
        assert!(!can_log_progress(&habit, 0.0, None));
        assert!(!can_log_progress(&habit, -3.0, None));
    }

    #[test]
    fn test_archived_habit_rejects_logging() {
        let habit = habit(HabitKind::Binary, HabitStatus::Archived, None);
        assert!(!can_log_progress(&habit, 1.0, None));
    }

    #[test]
    fn test_unit_mismatch_rejected_case_insensitively() {
        let habit = habit(
            HabitKind::Measurable,
            HabitStatus::Ongoing,
            Some(Target::new(30.0, Unit::Minutes)),
        );
        assert!(can_log_progress(&habit, 15.0, Some("minutes")));
        assert!(can_log_progress(&habit, 15.0, Some("MINUTES")));
        assert!(!can_log_progress(&habit, 15.0, Some("hours")));
        // Empty or absent units are not checked against the target
        assert!(can_log_progress(&habit, 15.0, Some("  ")));
        assert!(can_log_progress(&habit, 15.0, None));
    }

    #[test]
    fn test_kind_change_only_on_pristine_habits() {
        let habit = habit(HabitKind::Binary, HabitStatus::Ongoing, None);
        assert!(can_change_kind(&[]));
        assert!(!can_change_kind(&one_log(habit.id)));
    }

    #[test]
    fn test_completed_habit_with_history_protected_from_delete() {
        let habit = habit(HabitKind::Binary, HabitStatus::Completed, None);
        let logs = one_log(habit.id);

        assert!(!can_delete(&habit, &logs));
        assert!(can_delete(&habit, &[]));

        let ongoing = self::habit(HabitKind::Binary, HabitStatus::Ongoing, None);
        assert!(can_delete(&ongoing, &logs));
    }

    #[test]
    fn test_frequency_predicate() {
        assert!(is_valid_frequency(&Frequency::new(Period::Daily, 5)));
        assert!(!is_valid_frequency(&Frequency::new(Period::Daily, 6)));
        assert!(!is_valid_frequency(&Frequency::new(Period::Weekly, 0)));
    }

    #[test]
    fn test_milestone_progression_rejects_duplicates() {
        let milestones = vec![
            Milestone::new("a".to_string(), 10.0),
            Milestone::new("b".to_string(), 10.0),
            Milestone::new("c".to_string(), 20.0),
        ];
        assert!(!is_valid_milestone_progression(&milestones));

        let ascending = vec![
            Milestone::new("a".to_string(), 10.0),
            Milestone::new("b".to_string(), 20.0),
        ];
        assert!(is_valid_milestone_progression(&ascending));
        assert!(is_valid_milestone_progression(&[]));
        assert!(is_valid_milestone_progression(&ascending[..1]));
    }
}
