//! CLI error type, its exit codes, and how it is shown on stderr.

use std::error::Error;
use std::path::PathBuf;

use owo_colors::OwoColorize;
use thiserror::Error;

use stratum_core::error::StratumError;

pub use stratum_core::error::ErrorCategory as CoreCategory;

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid user input that clap could not catch.
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// `init` found an existing configuration file.
    #[error("Configuration already exists at {path}")]
    ConfigExists { path: PathBuf },

    /// A configuration file could not be read, parsed, or written.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `stratum-core` or its adapters.
    #[error("{0}")]
    Core(#[from] StratumError),

    /// An I/O operation failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::InvalidInput { message } => vec![
                format!("Check your input: {message}"),
                "Use --help for usage information".into(),
            ],

            Self::ConfigExists { path } => vec![
                format!("'{}' is already present", path.display()),
                "Use --force to overwrite it".into(),
                "Inspect the current values with 'stratum config list'".into(),
            ],

            Self::ConfigError { .. } => vec![
                "Check the JSON syntax of your .stratum.json".into(),
                "Print the file in effect with 'stratum config path'".into(),
                "Run 'stratum init --force' to write a fresh default".into(),
            ],

            Self::Core(core) => core.suggestions(),

            Self::IoError { message, .. } => vec![
                format!("I/O operation failed: {message}"),
                "Check file permissions".into(),
                "Check available disk space".into(),
            ],
        }
    }

    /// Error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } | Self::ConfigExists { .. } => ErrorCategory::UserError,
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::Validation => ErrorCategory::UserError,
                CoreCategory::NotFound => ErrorCategory::NotFound,
                CoreCategory::Internal => ErrorCategory::Internal,
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | User error    |  2   |
    /// | Not found     |  3   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::UserError => 2,
            ErrorCategory::NotFound => 3,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Human-readable report: the message, the cause chain when `verbose`,
    /// then suggestions. ANSI styling only when `color` is set.
    pub fn render(&self, verbose: bool, color: bool) -> String {
        let paint = |text: &str, style: Style| -> String {
            if !color {
                return text.to_owned();
            }
            match style {
                Style::Alert => text.red().bold().to_string(),
                Style::Body => text.red().to_string(),
                Style::Faint => text.dimmed().to_string(),
                Style::Heading => text.yellow().bold().to_string(),
            }
        };

        let mut lines = vec![
            String::new(),
            format!(
                "{} {}",
                paint("error:", Style::Alert),
                paint(&self.to_string(), Style::Body)
            ),
        ];

        if verbose {
            let causes = std::iter::successors(self.source(), |&err| err.source());
            lines.extend(causes.map(|cause| paint(&format!("  caused by: {cause}"), Style::Faint)));
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            lines.push(String::new());
            lines.push(paint("help:", Style::Heading));
            lines.extend(suggestions.iter().map(|s| format!("  - {s}")));
        }

        if !verbose {
            lines.push(String::new());
            lines.push(paint("Re-run with -v to see the underlying cause.", Style::Faint));
        }

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    /// Emit one event carrying the category; the source goes at debug.
    pub fn log(&self) {
        let category = self.category();
        match category {
            ErrorCategory::UserError | ErrorCategory::NotFound => {
                tracing::warn!(?category, "{self}")
            }
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                tracing::error!(?category, "{self}")
            }
        }
        if let Some(source) = self.source() {
            tracing::debug!(%source, "underlying error");
        }
    }
}

#[derive(Clone, Copy)]
enum Style {
    Alert,
    Body,
    Faint,
    Heading,
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// User input error (validation, invalid arguments).
    UserError,
    /// Project, module, or prerequisite not found.
    NotFound,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}

/// Attach a description of what was being attempted to an I/O failure.
pub trait IoContext<T> {
    fn io_context(self, what: impl FnOnce() -> String) -> CliResult<T>;
}

impl<T> IoContext<T> for std::io::Result<T> {
    fn io_context(self, what: impl FnOnce() -> String) -> CliResult<T> {
        self.map_err(|source| CliError::IoError {
            message: what(),
            source,
        })
    }
}
