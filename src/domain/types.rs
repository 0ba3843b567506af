/// Core types and enums used throughout the domain layer
///
/// This module defines the fundamental types like HabitKind, HabitStatus,
/// and Frequency that are used by Habit, HabitLog, and the progress
/// calculator.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use crate::domain::DomainError;

/// Unique identifier for a habit
///
/// This is a wrapper around UUID to provide type safety - you can't accidentally
/// pass a habit ID where a log ID is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HabitId(pub Uuid);

impl HabitId {
    /// Generate a new random habit ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a habit ID from a string (useful when parsing request parameters)
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for HabitId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for HabitId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Unique identifier for a habit log record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LogId(pub Uuid);

impl LogId {
    /// Generate a new random log ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Create a log ID from a string
    pub fn from_string(s: &str) -> Result<Self, uuid::Error> {
        Ok(Self(Uuid::parse_str(s)?))
    }
}

impl Default for LogId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for LogId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// How a habit's completion is tracked
///
/// A binary habit is a yes/no check ("did I meditate?"); a measurable habit
/// accumulates a quantity against a Target ("read 30 minutes"). Keeping this
/// a sum type forces every completion and validation rule to handle both
/// variants explicitly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitKind {
    /// Yes/no completion tracking, no magnitude
    Binary,
    /// Quantity-tracked habit with a numeric target and unit
    Measurable,
}

impl HabitKind {
    /// Get the display name for this kind
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitKind::Binary => "binary",
            HabitKind::Measurable => "measurable",
        }
    }
}

impl FromStr for HabitKind {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "binary" => Ok(HabitKind::Binary),
            "measurable" => Ok(HabitKind::Measurable),
            other => Err(DomainError::Validation {
                message: format!("Invalid habit kind '{}'. Valid options: binary, measurable", other),
            }),
        }
    }
}

/// Lifecycle status of a habit
///
/// Habits start Ongoing. Transitions to Completed or Archived only happen
/// through an explicit update, never inferred from progress data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum HabitStatus {
    /// Actively tracked
    Ongoing,
    /// Finished for good, history retained
    Completed,
    /// Shelved; no further progress may be logged
    Archived,
}

impl HabitStatus {
    /// Get the display name for this status
    pub fn as_str(&self) -> &'static str {
        match self {
            HabitStatus::Ongoing => "ongoing",
            HabitStatus::Completed => "completed",
            HabitStatus::Archived => "archived",
        }
    }
}

impl FromStr for HabitStatus {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ongoing" => Ok(HabitStatus::Ongoing),
            "completed" => Ok(HabitStatus::Completed),
            "archived" => Ok(HabitStatus::Archived),
            other => Err(DomainError::Validation {
                message: format!(
                    "Invalid habit status '{}'. Valid options: ongoing, completed, archived",
                    other
                ),
            }),
        }
    }
}

/// The scheduling period a frequency counts against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Period {
    Daily,
    Weekly,
    Monthly,
}

impl Period {
    /// Get the display name for this period
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Daily => "daily",
            Period::Weekly => "weekly",
            Period::Monthly => "monthly",
        }
    }
}

impl FromStr for Period {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "daily" => Ok(Period::Daily),
            "weekly" => Ok(Period::Weekly),
            "monthly" => Ok(Period::Monthly),
            other => Err(DomainError::InvalidFrequency(format!(
                "Invalid period '{}'. Valid options: daily, weekly, monthly",
                other
            ))),
        }
    }
}

/// How often a habit should be performed: `times` per `period`
///
/// `times` is bounded to 1-10, and daily frequencies are further capped at 5.
/// The frequency feeds the period-progress denominators in the calculator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Frequency {
    pub period: Period,
    pub times: u8,
}

impl Frequency {
    pub fn new(period: Period, times: u8) -> Self {
        Self { period, times }
    }

    /// Approximate per-day expectation for this frequency
    ///
    /// Daily returns `times`; Weekly and Monthly floor-divide across the
    /// period. Low weekly/monthly counts round down to zero - callers of the
    /// progress denominators must tolerate that, it is documented behavior.
    pub fn target_per_day(&self) -> u32 {
        match self.period {
            Period::Daily => u32::from(self.times),
            Period::Weekly => u32::from(self.times) / 7,
            Period::Monthly => u32::from(self.times) / 30,
        }
    }

    /// Check whether this frequency is within the allowed bounds
    pub fn is_valid(&self) -> bool {
        if self.times < 1 || self.times > 10 {
            return false;
        }
        if self.period == Period::Daily && self.times > 5 {
            return false;
        }
        true
    }

    /// Validate this frequency, describing the violation on failure
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.times < 1 || self.times > 10 {
            return Err(DomainError::InvalidFrequency(format!(
                "Frequency times must be 1-10, got {}",
                self.times
            )));
        }
        if self.period == Period::Daily && self.times > 5 {
            return Err(DomainError::InvalidFrequency(format!(
                "Daily frequency cannot exceed 5 times, got {}",
                self.times
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frequency_bounds() {
        assert!(Frequency::new(Period::Daily, 1).is_valid());
        assert!(Frequency::new(Period::Daily, 5).is_valid());
        assert!(!Frequency::new(Period::Daily, 6).is_valid());
        assert!(Frequency::new(Period::Weekly, 10).is_valid());
        assert!(!Frequency::new(Period::Weekly, 11).is_valid());
        assert!(!Frequency::new(Period::Monthly, 0).is_valid());
    }

    #[test]
    fn test_target_per_day_floors() {
        assert_eq!(Frequency::new(Period::Daily, 3).target_per_day(), 3);
        assert_eq!(Frequency::new(Period::Weekly, 7).target_per_day(), 1);
        // Low counts on longer periods floor to zero
        assert_eq!(Frequency::new(Period::Weekly, 3).target_per_day(), 0);
        assert_eq!(Frequency::new(Period::Monthly, 10).target_per_day(), 0);
    }

    #[test]
    fn test_kind_and_status_parsing() {
        assert_eq!("Binary".parse::<HabitKind>().unwrap(), HabitKind::Binary);
        assert_eq!("MEASURABLE".parse::<HabitKind>().unwrap(), HabitKind::Measurable);
        assert!("hourly".parse::<Period>().is_err());
        assert_eq!("archived".parse::<HabitStatus>().unwrap(), HabitStatus::Archived);
    }
}
