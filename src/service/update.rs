/// Operation for updating existing habits
///
/// Covers property edits (name, status, frequency, target, milestone
/// configuration), kind changes (gated on a pristine log history), and
/// milestone progress updates.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::domain::{Frequency, HabitKind, HabitStatus, Milestone, Period, Target, Unit};
use crate::rules;
use crate::service::create::MilestoneParams;
use crate::service::log::parse_habit_id;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Parameters for updating an existing habit
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHabitParams {
    pub habit_id: String,
    #[serde(default)]
    pub name: Option<String>,
    /// "ongoing", "completed" or "archived"
    #[serde(default)]
    pub status: Option<String>,
    /// "binary" or "measurable"; only allowed while no progress is logged
    #[serde(default)]
    pub kind: Option<String>,
    /// New frequency; period and times must be supplied together
    #[serde(default)]
    pub period: Option<String>,
    #[serde(default)]
    pub times: Option<u8>,
    /// New target; value and unit must be supplied together
    #[serde(default)]
    pub target_value: Option<f64>,
    #[serde(default)]
    pub target_unit: Option<String>,
    /// Remove the target entirely
    #[serde(default)]
    pub clear_target: bool,
    /// Replace the milestone configuration
    #[serde(default)]
    pub milestones: Option<Vec<MilestoneParams>>,
    /// Move a named milestone to a new cumulative progress value
    #[serde(default)]
    pub milestone_progress: Option<MilestoneProgressParams>,
}

/// A milestone progress update
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneProgressParams {
    pub name: String,
    pub current: f64,
}

/// Response from updating a habit
#[derive(Debug, Serialize)]
pub struct UpdateHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Update a habit using the provided storage
pub fn update_habit<S: HabitStorage>(
    storage: &S,
    params: UpdateHabitParams,
) -> Result<UpdateHabitResponse, ServiceError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let mut habit = storage.get_habit(&habit_id)?;

    let status = params
        .status
        .as_deref()
        .map(str::parse::<HabitStatus>)
        .transpose()?;

    let frequency = match (params.period, params.times) {
        (Some(period), Some(times)) => Some(Frequency::new(period.parse::<Period>()?, times)),
        (None, None) => None,
        _ => {
            return Err(ServiceError::InvalidParams(
                "Frequency period and times must be supplied together".to_string(),
            ))
        }
    };

    let target = match (params.target_value, params.target_unit, params.clear_target) {
        (None, None, true) => Some(None),
        (Some(value), Some(unit), false) => Some(Some(Target::new(value, unit.parse::<Unit>()?))),
        (None, None, false) => None,
        _ => {
            return Err(ServiceError::InvalidParams(
                "Target value and unit must be supplied together, and not combined with clear_target"
                    .to_string(),
            ))
        }
    };

    let milestones = params.milestones.map(|list| {
        list.into_iter()
            .map(|m| Milestone::new(m.name, m.target))
            .collect::<Vec<Milestone>>()
    });

    // Kind changes are only allowed on habits with no logged history
    if let Some(ref kind) = params.kind {
        let kind: HabitKind = kind.parse()?;
        let logs = storage.logs_for_habit(&habit.id)?;
        if !rules::can_change_kind(&logs) {
            return Err(ServiceError::RuleViolation(format!(
                "Cannot change kind of habit '{}': progress has already been logged",
                habit.name
            )));
        }
        habit.change_kind(kind)?;
    }

    habit.update(params.name, status, frequency, target, milestones)?;

    if let Some(progress) = params.milestone_progress {
        habit.update_milestone_progress(&progress.name, progress.current, Utc::now())?;
    }

    storage.update_habit(&habit)?;
    tracing::info!(habit_id = %habit_id, "updated habit");

    Ok(UpdateHabitResponse {
        success: true,
        message: format!("Updated habit '{}'", habit.name),
    })
}
