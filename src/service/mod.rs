/// Service operations for habit management
///
/// This is the orchestration layer the pure core is written for: each
/// operation loads a habit and its log history from storage, consults the
/// rule predicates before mutating anything, and hands habit+logs to the
/// progress calculator when building responses.

pub mod create;
pub mod delete;
pub mod list;
pub mod log;
pub mod status;
pub mod update;

// Re-export operation functions and DTOs for easy access
pub use create::*;
pub use delete::*;
pub use list::*;
pub use log::*;
pub use status::*;
pub use update::*;

use thiserror::Error;

use crate::domain::DomainError;
use crate::storage::StorageError;

/// Errors that can occur during service operations
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    #[error("Domain validation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Rule violation: {0}")]
    RuleViolation(String),

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),
}
