/// Public library interface for the habit progress and completion engine
///
/// The crate is split the way the data flows: `domain` holds the entities
/// and their owned value objects, `progress` computes completion/streak
/// snapshots as pure functions, `rules` gates mutations, `storage` is the
/// persistence seam, and `service` orchestrates the three over a storage
/// implementation.

// Internal modules
mod domain;
mod progress;
mod rules;
mod service;
mod storage;

// Re-export public modules and types
pub use domain::*;
pub use progress::{
    completed_on_day, completion_rate, current_streak, month_progress, snapshot, today_progress,
    week_progress, ProgressSnapshot,
};
pub use rules::{
    can_change_kind, can_delete, can_log_progress, is_valid_frequency,
    is_valid_milestone_progression,
};
pub use service::*;
pub use storage::{HabitStorage, MemoryStorage, StorageError};

/// Habit tracker facade bundling a storage implementation with the
/// service operations
///
/// Callers that don't want to wire the service functions themselves can
/// construct one of these around any `HabitStorage` implementation.
pub struct HabitTracker<S: HabitStorage> {
    storage: S,
}

impl<S: HabitStorage> HabitTracker<S> {
    /// Create a tracker over the given storage implementation
    pub fn new(storage: S) -> Self {
        tracing::info!("initializing habit tracker");
        Self { storage }
    }

    /// Get a reference to the storage layer (useful for testing)
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Create a new habit
    pub fn create_habit(
        &self,
        params: CreateHabitParams,
    ) -> Result<CreateHabitResponse, ServiceError> {
        service::create_habit(&self.storage, params)
    }

    /// Log a progress entry against a habit
    pub fn log_progress(
        &self,
        params: LogProgressParams,
    ) -> Result<LogProgressResponse, ServiceError> {
        service::log_progress(&self.storage, params)
    }

    /// Get progress reports for one habit or all habits
    pub fn habit_status(&self, params: StatusParams) -> Result<StatusResponse, ServiceError> {
        service::habit_status(&self.storage, params)
    }

    /// Update a habit's configuration, status, or milestone progress
    pub fn update_habit(
        &self,
        params: UpdateHabitParams,
    ) -> Result<UpdateHabitResponse, ServiceError> {
        service::update_habit(&self.storage, params)
    }

    /// Delete a habit, subject to the deletion rules
    pub fn delete_habit(
        &self,
        params: DeleteHabitParams,
    ) -> Result<DeleteHabitResponse, ServiceError> {
        service::delete_habit(&self.storage, params)
    }

    /// List habits with an optional status filter
    pub fn list_habits(&self, params: ListHabitsParams) -> Result<ListHabitsResponse, ServiceError> {
        service::list_habits(&self.storage, params)
    }
}

impl HabitTracker<MemoryStorage> {
    /// Convenience constructor over in-memory storage
    pub fn in_memory() -> Self {
        Self::new(MemoryStorage::new())
    }
}
