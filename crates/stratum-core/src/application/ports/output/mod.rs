//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `stratum-adapters` crate provides implementations.

use std::path::{Path, PathBuf};

use crate::domain::{RenderContext, TemplateId};
use crate::error::StratumResult;

/// One immediate child of a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirEntry {
    pub name: String,
    pub path: PathBuf,
    pub is_dir: bool,
}

/// Port for filesystem operations.
///
/// Implemented by:
/// - `stratum_adapters::filesystem::LocalFilesystem` (production)
/// - `stratum_adapters::filesystem::MemoryFilesystem` (testing)
///
/// `Sync` is required because file classification reads through this port
/// from several threads.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path is an existing directory.
    fn is_dir(&self, path: &Path) -> bool;

    /// Immediate children of a directory, sorted by name.
    fn list_dir(&self, path: &Path) -> StratumResult<Vec<DirEntry>>;

    /// Every file below `path` at any depth, sorted.
    fn walk_files(&self, path: &Path) -> StratumResult<Vec<PathBuf>>;

    /// Read a file as UTF-8 text.
    fn read_to_string(&self, path: &Path) -> StratumResult<String>;

    /// Create a directory and all parent directories. Idempotent.
    fn create_dir_all(&self, path: &Path) -> StratumResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> StratumResult<()>;
}

/// Port for template rendering.
///
/// A pure function from template identifier and data record to text.
///
/// Implemented by:
/// - `stratum_adapters::renderer::SimpleRenderer` (bundled templates with
///   optional directory overrides)
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render a template. A template with no registered text fails with
    /// `ApplicationError::TemplateMissing`.
    fn render(&self, template: TemplateId, context: &RenderContext) -> StratumResult<String>;
}
