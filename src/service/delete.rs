/// Operation for deleting habits

use serde::{Deserialize, Serialize};

use crate::rules;
use crate::service::log::parse_habit_id;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Parameters for deleting a habit
#[derive(Debug, Clone, Deserialize)]
pub struct DeleteHabitParams {
    pub habit_id: String,
}

/// Response from deleting a habit
#[derive(Debug, Serialize)]
pub struct DeleteHabitResponse {
    pub success: bool,
    pub message: String,
}

/// Delete a habit using the provided storage
///
/// Gated by `rules::can_delete`: a completed habit with logged history is
/// protected; anything else may be removed along with its logs.
pub fn delete_habit<S: HabitStorage>(
    storage: &S,
    params: DeleteHabitParams,
) -> Result<DeleteHabitResponse, ServiceError> {
    let habit_id = parse_habit_id(&params.habit_id)?;
    let habit = storage.get_habit(&habit_id)?;
    let logs = storage.logs_for_habit(&habit_id)?;

    if !rules::can_delete(&habit, &logs) {
        return Err(ServiceError::RuleViolation(format!(
            "Cannot delete habit '{}': completed habits with logged history are protected",
            habit.name
        )));
    }

    storage.delete_habit(&habit_id)?;
    tracing::info!(habit_id = %habit_id, name = %habit.name, "deleted habit");

    Ok(DeleteHabitResponse {
        success: true,
        message: format!("Deleted habit '{}'", habit.name),
    })
}
