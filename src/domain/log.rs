/// HabitLog record for tracking logged progress
///
/// Each time the user logs progress against a habit we create a HabitLog.
/// The core reads these append-only records to compute completion; it never
/// mutates or deletes them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::{DomainError, HabitId, LogId};

/// A single logged progress entry for a habit
///
/// Binary habits log `value == 1`; measurable habits log any positive
/// quantity. Aggregation happens at UTC day granularity via [`HabitLog::day`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitLog {
    /// Unique identifier for this record
    pub id: LogId,
    /// Which habit this entry is for
    pub habit_id: HabitId,
    /// Amount logged (1 for binary habits)
    pub value: f64,
    /// When the progress was logged
    pub logged_at: DateTime<Utc>,
}

impl HabitLog {
    /// Create a new log record with validation
    pub fn new(habit_id: HabitId, value: f64, logged_at: DateTime<Utc>) -> Result<Self, DomainError> {
        if value <= 0.0 {
            return Err(DomainError::InvalidValue {
                message: "Logged value must be greater than 0".to_string(),
            });
        }
        if logged_at > Utc::now() {
            return Err(DomainError::InvalidDate(
                "Cannot log progress for a future time".to_string(),
            ));
        }

        Ok(Self {
            id: LogId::new(),
            habit_id,
            value,
            logged_at,
        })
    }

    /// The UTC calendar day this entry counts toward
    pub fn day(&self) -> NaiveDate {
        self.logged_at.date_naive()
    }
}
