//! Domain Errors
//!
//! Failures the store and config loader can report. None of them reach the
//! user; the coordinator logs and drops them.

use serde::{Deserialize, Serialize};

/// Common result type for domain operations
pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DomainError {
    /// No entry with the requested id
    NotFound(String),
    /// Config text or a config value could not be used
    InvalidInput(String),
}

impl std::fmt::Display for DomainError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DomainError::NotFound(what) => write!(f, "Not found: {}", what),
            DomainError::InvalidInput(what) => write!(f, "Invalid input: {}", what),
        }
    }
}

impl std::error::Error for DomainError {}
