/// Storage layer for persisting habit data
///
/// The core never performs I/O itself; it consumes this interface. A real
/// database layer implements `HabitStorage`, and `MemoryStorage` provides
/// an in-process implementation for tests and embedding.

pub mod memory;

pub use memory::MemoryStorage;

use thiserror::Error;

use crate::domain::{Habit, HabitId, HabitLog, HabitStatus};

/// Errors that can occur during storage operations
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Habit not found: {habit_id}")]
    HabitNotFound { habit_id: String },

    #[error("Habit already exists: {habit_id}")]
    DuplicateHabit { habit_id: String },

    #[error("Storage lock poisoned")]
    LockPoisoned,
}

/// Trait defining the storage interface for habits
///
/// This is the persistence seam the core consumes: habits are loaded and
/// saved whole (their value objects have no separate lifecycle), and log
/// records are append-only - there is deliberately no way to mutate or
/// delete an individual log through this interface.
pub trait HabitStorage {
    /// Create a new habit
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Get a habit by ID
    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError>;

    /// Replace an existing habit's state
    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError>;

    /// Delete a habit and its log history
    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError>;

    /// List habits, optionally filtered by status
    fn list_habits(&self, status: Option<HabitStatus>) -> Result<Vec<Habit>, StorageError>;

    /// Append a log record
    fn create_log(&self, log: &HabitLog) -> Result<(), StorageError>;

    /// Get the full log history for a habit
    fn logs_for_habit(&self, habit_id: &HabitId) -> Result<Vec<HabitLog>, StorageError>;
}
