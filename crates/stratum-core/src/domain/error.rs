use thiserror::Error;

/// Rule violations detected without touching the filesystem.
///
/// `Clone` because classification results are collected across rayon
/// workers before being folded into a module.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    #[error("Invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: String },

    #[error("Unknown resource kind: {0}")]
    UnknownResourceKind(String),

    #[error("Unknown identifier type: {0}")]
    UnknownIdType(String),

    #[error("Unknown injection style: {0}")]
    UnknownInjectionStyle(String),

    #[error("Unknown template: {0}")]
    UnknownTemplate(String),
}

impl DomainError {
    pub fn suggestions(&self) -> Vec<String> {
        let (problem, accepted) = match self {
            Self::InvalidName { name, reason } => {
                return vec![
                    format!("'{name}' is not accepted: {reason}"),
                    "Resource names are PascalCase, e.g. Order or OrderItem".into(),
                    "Module names are lowercase letters and digits, e.g. billing".into(),
                ];
            }
            Self::UnknownResourceKind(kind) => (kind, "entity, repository, service, controller"),
            Self::UnknownIdType(id) => (id, "uuid, long"),
            Self::UnknownInjectionStyle(style) => (style, "constructor, field"),
            Self::UnknownTemplate(name) => (name, "the template names listed in builtin_templates"),
        };
        vec![format!("'{problem}' is not recognised; expected one of: {accepted}")]
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownTemplate(_) => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

/// Coarse classification shared by every error layer; the CLI maps it to
/// exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
