//! Filesystem-based template override loader.
//!
//! Reads `<template-name>.java.tpl` files from one flat directory:
//!
//! ```text
//! .stratum/templates/
//! ├── entity.java.tpl
//! ├── service-impl.java.tpl
//! └── controller.java.tpl
//! ```
//!
//! File names that do not match a known template are skipped with a warning
//! rather than failing the whole load.

use std::{
    fs,
    path::{Path, PathBuf},
    str::FromStr,
};

use tracing::{debug, instrument, warn};
use walkdir::WalkDir;

use stratum_core::{
    application::ApplicationError,
    domain::TemplateId,
    error::{StratumError, StratumResult},
};

use crate::builtin_templates::OVERRIDE_EXTENSION;

/// Loads override texts from a directory.
#[derive(Debug, Clone)]
pub struct TemplateOverrideLoader {
    root: PathBuf,
}

impl TemplateOverrideLoader {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Load every recognised override, sorted by file name.
    #[instrument(skip(self), fields(root = %self.root.display()))]
    pub fn load_all(&self) -> StratumResult<Vec<(TemplateId, String)>> {
        let mut overrides = Vec::new();

        let walker = WalkDir::new(&self.root)
            .min_depth(1)
            .max_depth(1)
            .sort_by_file_name();

        for entry in walker {
            let entry = entry.map_err(|e| {
                StratumError::from(ApplicationError::FilesystemError {
                    path: self.root.clone(),
                    reason: format!("Failed to read template directory: {e}"),
                })
            })?;
            if !entry.file_type().is_file() {
                continue;
            }

            let file_name = entry.file_name().to_string_lossy();
            let Some(stem) = file_name.strip_suffix(OVERRIDE_EXTENSION) else {
                debug!(file = %file_name, "not a template override, skipping");
                continue;
            };

            let id = match TemplateId::from_str(stem) {
                Ok(id) => id,
                Err(_) => {
                    warn!(file = %file_name, "unknown template name, skipping");
                    continue;
                }
            };

            let text = fs::read_to_string(entry.path()).map_err(|e| {
                StratumError::from(ApplicationError::FilesystemError {
                    path: entry.path().to_path_buf(),
                    reason: format!("Failed to read template: {e}"),
                })
            })?;
            debug!(template = %id, "override loaded");
            overrides.push((id, text));
        }

        Ok(overrides)
    }
}
