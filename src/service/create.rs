/// Operation for creating new habits

use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, Habit, HabitKind, Milestone, Period, Target, Unit};
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Parameters for creating a new habit
#[derive(Debug, Clone, Deserialize)]
pub struct CreateHabitParams {
    pub name: String,
    /// "binary" or "measurable"
    pub kind: String,
    /// "daily", "weekly" or "monthly"
    pub period: String,
    /// Times per period
    pub times: u8,
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub target_unit: Option<String>,
    #[serde(default)]
    pub milestones: Vec<MilestoneParams>,
}

/// A milestone as supplied by the caller
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneParams {
    pub name: String,
    pub target: f64,
}

/// Response from creating a habit
#[derive(Debug, Serialize)]
pub struct CreateHabitResponse {
    pub success: bool,
    pub habit_id: String,
    pub message: String,
}

/// Create a new habit using the provided storage
pub fn create_habit<S: HabitStorage>(
    storage: &S,
    params: CreateHabitParams,
) -> Result<CreateHabitResponse, ServiceError> {
    let kind: HabitKind = params.kind.parse()?;
    let period: Period = params.period.parse()?;
    let frequency = Frequency::new(period, params.times);

    let target = match (params.target_value, params.target_unit) {
        (Some(value), Some(unit)) => {
            let unit: Unit = unit.parse()?;
            Some(Target::new(value, unit))
        }
        (None, None) => None,
        _ => {
            return Err(ServiceError::InvalidParams(
                "Target value and unit must be supplied together".to_string(),
            ))
        }
    };

    let milestones: Vec<Milestone> = params
        .milestones
        .into_iter()
        .map(|m| Milestone::new(m.name, m.target))
        .collect();

    let habit = Habit::new(params.name, kind, frequency, target, milestones)?;
    let habit_id = habit.id.to_string();

    storage.create_habit(&habit)?;
    tracing::info!(habit_id = %habit_id, name = %habit.name, "created habit");

    Ok(CreateHabitResponse {
        success: true,
        habit_id,
        message: format!("✅ Created habit '{}'! Ready to start your streak!", habit.name),
    })
}
