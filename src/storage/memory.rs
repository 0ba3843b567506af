/// In-memory implementation of the storage interface
///
/// Backs the service layer in tests and lightweight embeddings. State lives
/// in `RwLock`ed maps so the trait's `&self` methods stay safe under
/// concurrent callers.

use std::collections::HashMap;
use std::sync::RwLock;

use crate::domain::{Habit, HabitId, HabitLog, HabitStatus};
use crate::storage::{HabitStorage, StorageError};

#[derive(Debug, Default)]
pub struct MemoryStorage {
    habits: RwLock<HashMap<HabitId, Habit>>,
    logs: RwLock<Vec<HabitLog>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl HabitStorage for MemoryStorage {
    fn create_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let mut habits = self.habits.write().map_err(|_| StorageError::LockPoisoned)?;
        if habits.contains_key(&habit.id) {
            return Err(StorageError::DuplicateHabit {
                habit_id: habit.id.to_string(),
            });
        }
        habits.insert(habit.id, habit.clone());
        Ok(())
    }

    fn get_habit(&self, habit_id: &HabitId) -> Result<Habit, StorageError> {
        let habits = self.habits.read().map_err(|_| StorageError::LockPoisoned)?;
        habits
            .get(habit_id)
            .cloned()
            .ok_or_else(|| StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            })
    }

    fn update_habit(&self, habit: &Habit) -> Result<(), StorageError> {
        let mut habits = self.habits.write().map_err(|_| StorageError::LockPoisoned)?;
        if !habits.contains_key(&habit.id) {
            return Err(StorageError::HabitNotFound {
                habit_id: habit.id.to_string(),
            });
        }
        habits.insert(habit.id, habit.clone());
        Ok(())
    }

    fn delete_habit(&self, habit_id: &HabitId) -> Result<(), StorageError> {
        let mut habits = self.habits.write().map_err(|_| StorageError::LockPoisoned)?;
        if habits.remove(habit_id).is_none() {
            return Err(StorageError::HabitNotFound {
                habit_id: habit_id.to_string(),
            });
        }
        // Logs have no lifecycle of their own once the habit is gone
        let mut logs = self.logs.write().map_err(|_| StorageError::LockPoisoned)?;
        logs.retain(|log| log.habit_id != *habit_id);
        Ok(())
    }

    fn list_habits(&self, status: Option<HabitStatus>) -> Result<Vec<Habit>, StorageError> {
        let habits = self.habits.read().map_err(|_| StorageError::LockPoisoned)?;
        let mut result: Vec<Habit> = habits
            .values()
            .filter(|habit| status.map_or(true, |s| habit.status == s))
            .cloned()
            .collect();
        result.sort_by_key(|habit| habit.created_at);
        Ok(result)
    }

    fn create_log(&self, log: &HabitLog) -> Result<(), StorageError> {
        {
            let habits = self.habits.read().map_err(|_| StorageError::LockPoisoned)?;
            if !habits.contains_key(&log.habit_id) {
                return Err(StorageError::HabitNotFound {
                    habit_id: log.habit_id.to_string(),
                });
            }
        }
        let mut logs = self.logs.write().map_err(|_| StorageError::LockPoisoned)?;
        logs.push(log.clone());
        Ok(())
    }

    fn logs_for_habit(&self, habit_id: &HabitId) -> Result<Vec<HabitLog>, StorageError> {
        let logs = self.logs.read().map_err(|_| StorageError::LockPoisoned)?;
        Ok(logs
            .iter()
            .filter(|log| log.habit_id == *habit_id)
            .cloned()
            .collect())
    }
}
