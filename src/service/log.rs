/// Operation for logging habit progress

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{HabitId, HabitLog};
use crate::progress;
use crate::rules;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Parameters for logging progress against a habit
#[derive(Debug, Clone, Deserialize)]
pub struct LogProgressParams {
    pub habit_id: String,
    /// Amount achieved; must be exactly 1 for binary habits
    pub value: f64,
    /// Optional unit, checked against the habit's target unit when present
    #[serde(default)]
    pub unit: Option<String>,
    /// Optional day in YYYY-MM-DD form; defaults to now
    #[serde(default)]
    pub logged_at: Option<String>,
}

/// Response from logging progress
#[derive(Debug, Serialize)]
pub struct LogProgressResponse {
    pub success: bool,
    pub message: String,
    pub current_streak: u32,
}

/// Log a progress entry using the provided storage
///
/// The mutation is gated by `rules::can_log_progress`; a rejected entry
/// surfaces as `ServiceError::RuleViolation` and nothing is written.
pub fn log_progress<S: HabitStorage>(
    storage: &S,
    params: LogProgressParams,
) -> Result<LogProgressResponse, ServiceError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let habit = storage.get_habit(&habit_id)?;

    if !rules::can_log_progress(&habit, params.value, params.unit.as_deref()) {
        tracing::warn!(habit_id = %habit_id, value = params.value, "progress entry rejected");
        return Err(ServiceError::RuleViolation(format!(
            "Cannot log {} against habit '{}': habit archived, value invalid for its kind, or unit mismatch",
            params.value, habit.name
        )));
    }

    let logged_at = match params.logged_at {
        Some(ref day) => parse_day(day)?,
        None => Utc::now(),
    };

    let log = HabitLog::new(habit.id, params.value, logged_at)?;
    storage.create_log(&log)?;

    let logs = storage.logs_for_habit(&habit.id)?;
    let streak = progress::current_streak(&habit, &logs, Utc::now());
    tracing::info!(habit_id = %habit_id, streak, "logged progress");

    Ok(LogProgressResponse {
        success: true,
        message: format!(
            "🔥 Logged progress! Current streak: {} day{}",
            streak,
            if streak == 1 { "" } else { "s" }
        ),
        current_streak: streak,
    })
}

pub(crate) fn parse_habit_id(raw: &str) -> Result<HabitId, ServiceError> {
    HabitId::from_string(raw.trim())
        .map_err(|_| ServiceError::InvalidParams(format!("Invalid habit id '{}'", raw)))
}

fn parse_day(raw: &str) -> Result<DateTime<Utc>, ServiceError> {
    let date = NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| ServiceError::InvalidParams(format!("Invalid date '{}', expected YYYY-MM-DD", raw)))?;
    Ok(date.and_time(NaiveTime::MIN).and_utc())
}
