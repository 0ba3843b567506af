/// Operation for listing habits

use serde::{Deserialize, Serialize};

use crate::domain::HabitStatus;
use crate::service::ServiceError;
use crate::storage::HabitStorage;

/// Parameters for listing habits
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListHabitsParams {
    /// Optional status filter: "ongoing", "completed" or "archived"
    #[serde(default)]
    pub status: Option<String>,
}

/// Summary line for a single habit
#[derive(Debug, Serialize)]
pub struct HabitSummary {
    pub habit_id: String,
    pub name: String,
    pub kind: String,
    pub status: String,
    pub frequency: String,
    pub target: Option<String>,
    pub milestone_count: usize,
}

/// Response from listing habits
#[derive(Debug, Serialize)]
pub struct ListHabitsResponse {
    pub habits: Vec<HabitSummary>,
    pub count: usize,
}

/// List habits using the provided storage
pub fn list_habits<S: HabitStorage>(
    storage: &S,
    params: ListHabitsParams,
) -> Result<ListHabitsResponse, ServiceError> {
    let status = params
        .status
        .as_deref()
        .map(str::parse::<HabitStatus>)
        .transpose()?;

    let habits = storage.list_habits(status)?;
    let summaries: Vec<HabitSummary> = habits
        .iter()
        .map(|habit| HabitSummary {
            habit_id: habit.id.to_string(),
            name: habit.name.clone(),
            kind: habit.kind.as_str().to_string(),
            status: habit.status.as_str().to_string(),
            frequency: format!("{}x {}", habit.frequency.times, habit.frequency.period.as_str()),
            target: habit.target.map(|t| t.display()),
            milestone_count: habit.milestones.len(),
        })
        .collect();

    let count = summaries.len();
    Ok(ListHabitsResponse { habits: summaries, count })
}
