//! Application layer errors.
//!
//! These errors represent failures in discovery and orchestration, not
//! naming or parsing rules. Those are `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur during discovery and generation.
#[derive(Debug, Error, Clone)]
pub enum ApplicationError {
    /// No source tree exists at any candidate path under the project root.
    #[error("Project not found: no source directory under {root} (checked {candidates})")]
    ProjectNotFound { root: PathBuf, candidates: String },

    /// No entry-point file anywhere under the source tree.
    #[error("Entry point not found: no *{suffix} containing {marker} under {source_root}")]
    EntryPointNotFound {
        source_root: PathBuf,
        suffix: &'static str,
        marker: &'static str,
    },

    /// The operation needs at least one module and the scan found none.
    #[error("No modules found under {path}")]
    NoModulesFound { path: PathBuf },

    /// The requested module is not among the discovered modules.
    #[error("Module '{module}' not found (available: {available})")]
    ModuleNotFound { module: String, available: String },

    /// A required artifact does not exist at its conventional path.
    #[error("Missing prerequisite: {artifact} '{name}' does not exist in module '{module}' (expected at {expected})")]
    MissingPrerequisite {
        artifact: &'static str,
        name: String,
        module: String,
        expected: PathBuf,
    },

    /// A template identifier has no registered text.
    #[error("Template missing: {template}")]
    TemplateMissing { template: String },

    /// Filesystem operation failed.
    #[error("Filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },

    /// Shared state lock was poisoned.
    #[error("Internal lock poisoned")]
    LockPoisoned,
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ProjectNotFound { root, .. } => vec![
                format!("Searched from: {}", root.display()),
                "Run stratum from inside a Maven or Gradle project".into(),
                "Or pass --project-dir <path>".into(),
            ],
            Self::EntryPointNotFound { marker, .. } => vec![
                format!("Add a class annotated with {} under the source tree", marker),
                "The base package is derived from its location".into(),
            ],
            Self::NoModulesFound { .. } => vec![
                "Create one first: stratum create module <name>".into(),
            ],
            Self::ModuleNotFound { available, .. } => vec![
                format!("Available modules: {}", available),
                "Create it with: stratum create module <name>".into(),
            ],
            Self::MissingPrerequisite { artifact, name, module, .. } => vec![
                format!(
                    "Generate it first: stratum create resource {} {} --module {}",
                    artifact, name, module
                ),
                format!(
                    "Or generate everything at once: stratum create resource entity {} --module {} --full",
                    name, module
                ),
            ],
            Self::TemplateMissing { .. } => vec![
                "This is a packaging defect, please report it".into(),
                "Check $STRATUM_TEMPLATES_DIR overrides for typos".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
            Self::LockPoisoned => vec!["Try again".into()],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ProjectNotFound { .. }
            | Self::EntryPointNotFound { .. }
            | Self::NoModulesFound { .. }
            | Self::ModuleNotFound { .. }
            | Self::MissingPrerequisite { .. } => ErrorCategory::NotFound,
            Self::TemplateMissing { .. } | Self::FilesystemError { .. } | Self::LockPoisoned => {
                ErrorCategory::Internal
            }
        }
    }
}
