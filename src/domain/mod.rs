/// Domain module containing core business logic and data types
///
/// This module defines the core entities (Habit, HabitLog) and the value
/// objects a habit owns (Frequency, Target, Milestone), along with their
/// validation rules.

pub mod habit;
pub mod log;
pub mod milestone;
pub mod target;
pub mod types;

// Re-export public types for easy access
pub use habit::*;
pub use log::*;
pub use milestone::*;
pub use target::*;
pub use types::*;

use thiserror::Error;

/// Errors that can occur during domain operations
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Invalid habit name: {0}")]
    InvalidHabitName(String),

    #[error("Invalid frequency: {0}")]
    InvalidFrequency(String),

    #[error("Invalid target: {0}")]
    InvalidTarget(String),

    #[error("Invalid milestone: {0}")]
    InvalidMilestone(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid value: {message}")]
    InvalidValue { message: String },
}
