/// Operation for checking habit progress and streaks

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::progress::{self, ProgressSnapshot};
use crate::service::log::parse_habit_id;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Parameters for checking habit status
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StatusParams {
    /// If omitted, returns all habits
    #[serde(default)]
    pub habit_id: Option<String>,
}

/// Progress report for a single habit
#[derive(Debug, Serialize)]
pub struct HabitReport {
    pub habit_id: String,
    pub name: String,
    pub status: String,
    pub snapshot: ProgressSnapshot,
}

/// Response from checking habit status
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub habits: Vec<HabitReport>,
    pub summary: String,
}

/// Get progress reports for one habit or all habits
pub fn habit_status<S: HabitStorage>(
    storage: &S,
    params: StatusParams,
) -> Result<StatusResponse, ServiceError> {
    let now = Utc::now();

    let habits = match params.habit_id {
        Some(ref raw) => vec![storage.get_habit(&parse_habit_id(raw)?)?],
        None => storage.list_habits(None)?,
    };

    let mut reports = Vec::with_capacity(habits.len());
    for habit in habits {
        let logs = storage.logs_for_habit(&habit.id)?;
        let snapshot = progress::snapshot(&habit, &logs, now);
        reports.push(HabitReport {
            habit_id: habit.id.to_string(),
            name: habit.name.clone(),
            status: habit.status.as_str().to_string(),
            snapshot,
        });
    }

    let completed_today = reports.iter().filter(|r| r.snapshot.completed_today).count();
    let summary = if reports.is_empty() {
        "No habits found. Create your first habit to get started!".to_string()
    } else {
        format!(
            "📊 {} of {} habits completed today. Total streak days: {}",
            completed_today,
            reports.len(),
            reports.iter().map(|r| r.snapshot.current_streak).sum::<u32>()
        )
    };

    Ok(StatusResponse { habits: reports, summary })
}
