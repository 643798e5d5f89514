//! Command handlers. Each translates parsed arguments into calls on the
//! core services and renders the outcome; no business logic lives here.

use std::path::{Path, PathBuf};

use stratum_adapters::LocalFilesystem;
use stratum_core::{application::DiscoveryService, domain::ProjectStructure};

use crate::error::CliResult;

pub mod completions;
pub mod config;
pub mod create;
pub mod init;
pub mod scan;

/// Scan the project rooted at `root` from the real filesystem.
pub(crate) fn scan_project(root: &Path) -> CliResult<ProjectStructure> {
    let discovery = DiscoveryService::new(Box::new(LocalFilesystem::new()));
    Ok(discovery.scan(root)?)
}

/// `path` relative to `root` for display, unchanged when outside it.
pub(crate) fn display_path(path: &Path, root: &Path) -> PathBuf {
    path.strip_prefix(root)
        .map(Path::to_path_buf)
        .unwrap_or_else(|_| path.to_path_buf())
}
