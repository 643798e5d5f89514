//! The error type returned across the crate boundary.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Either a rule violation or a failure while discovering or generating.
#[derive(Debug, Error, Clone)]
pub enum StratumError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error(transparent)]
    Application(#[from] ApplicationError),
}

pub type StratumResult<T> = Result<T, StratumError>;

impl StratumError {
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// True when generation stopped because an entity, repository or
    /// service it builds on does not exist yet.
    pub fn is_missing_prerequisite(&self) -> bool {
        matches!(
            self,
            Self::Application(ApplicationError::MissingPrerequisite { .. })
        )
    }
}
