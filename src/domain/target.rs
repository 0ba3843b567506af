/// Target value object: a numeric goal with a unit
///
/// A habit's target is what a day's logged values are measured against.
/// Which units are admissible depends on the habit kind: binary habits only
/// count sessions or tasks, measurable habits take the quantitative units.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::{DomainError, HabitKind};

const KM_PER_MILE: f64 = 1.60934;

/// Closed set of units a target can be expressed in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Sessions,
    Tasks,
    Minutes,
    Hours,
    Steps,
    Km,
    Miles,
    Cal,
    Pages,
    Books,
}

impl Unit {
    /// Lowercase name, matching the accepted parse forms
    pub fn as_str(&self) -> &'static str {
        match self {
            Unit::Sessions => "sessions",
            Unit::Tasks => "tasks",
            Unit::Minutes => "minutes",
            Unit::Hours => "hours",
            Unit::Steps => "steps",
            Unit::Km => "km",
            Unit::Miles => "miles",
            Unit::Cal => "cal",
            Unit::Pages => "pages",
            Unit::Books => "books",
        }
    }

    /// Whether this unit is admissible for the given habit kind
    pub fn allowed_for(&self, kind: HabitKind) -> bool {
        match kind {
            HabitKind::Binary => matches!(self, Unit::Sessions | Unit::Tasks),
            HabitKind::Measurable => matches!(
                self,
                Unit::Minutes
                    | Unit::Hours
                    | Unit::Steps
                    | Unit::Km
                    | Unit::Miles
                    | Unit::Cal
                    | Unit::Pages
                    | Unit::Books
            ),
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Unit {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "sessions" => Ok(Unit::Sessions),
            "tasks" => Ok(Unit::Tasks),
            "minutes" => Ok(Unit::Minutes),
            "hours" => Ok(Unit::Hours),
            "steps" => Ok(Unit::Steps),
            "km" => Ok(Unit::Km),
            "miles" => Ok(Unit::Miles),
            "cal" => Ok(Unit::Cal),
            "pages" => Ok(Unit::Pages),
            "books" => Ok(Unit::Books),
            other => Err(DomainError::InvalidTarget(format!(
                "Invalid unit '{}'. Valid options: sessions, tasks, minutes, hours, steps, km, miles, cal, pages, books",
                other
            ))),
        }
    }
}

/// A habit's numeric goal
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Target {
    pub value: f64,
    pub unit: Unit,
}

impl Target {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }

    /// Check the unit against the habit kind's allowed set
    pub fn is_valid_for(&self, kind: HabitKind) -> bool {
        self.unit.allowed_for(kind)
    }

    /// Normalize to a base unit for consistent aggregation
    ///
    /// hours become minutes, miles become km; everything else passes
    /// through unchanged. A habit carries a single target unit in practice,
    /// so this only matters where mixed units could meet.
    pub fn to_base_unit(&self) -> Target {
        match self.unit {
            Unit::Hours => Target::new(self.value * 60.0, Unit::Minutes),
            Unit::Miles => Target::new(self.value * KM_PER_MILE, Unit::Km),
            _ => *self,
        }
    }

    /// Display string like "30 minutes"
    pub fn display(&self) -> String {
        format!("{} {}", self.value, self.unit)
    }
}
