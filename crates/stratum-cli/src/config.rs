//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns loading; the core crate only sees the
//! [`GeneratorConfig`] record inside it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. Environment variables: `STRATUM__GENERATOR__IDTYPE=LONG`,
//!    `STRATUM__OUTPUT__NO_COLOR=true`, ...
//! 2. One JSON file: `--config <FILE>`, else `<project root>/.stratum.json`,
//!    else `config.json` in the per-user config directory
//! 3. Built-in defaults

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use stratum_core::domain::GeneratorConfig;

use crate::error::{CliError, CliResult};

/// File name of the per-project configuration.
pub const PROJECT_CONFIG_FILE: &str = ".stratum.json";

const ENV_PREFIX: &str = "STRATUM";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Generation preferences handed to the core services.
    pub generator: GeneratorConfig,
    /// Output settings.
    pub output: OutputConfig,
    /// File the values were read from, if any.
    #[serde(skip)]
    pub source: Option<PathBuf>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OutputConfig {
    #[serde(alias = "no_color", alias = "nocolor")]
    pub no_color: bool,
}

impl AppConfig {
    /// Load configuration for the project rooted at `project_root`.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&Path>, project_root: &Path) -> CliResult<Self> {
        let source = match config_file {
            Some(path) => {
                if !path.is_file() {
                    return Err(CliError::ConfigError {
                        message: format!("config file '{}' does not exist", path.display()),
                        source: None,
                    });
                }
                Some(path.to_path_buf())
            }
            None => Self::discover(project_root),
        };

        let mut builder = config::Config::builder();

        if let Some(path) = &source {
            debug!(path = %path.display(), "reading configuration file");
            builder = builder.add_source(
                config::File::new(&path.to_string_lossy(), config::FileFormat::Json)
                    .required(true),
            );
        }

        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .separator("__")
                .try_parsing(true),
        );

        let mut loaded: AppConfig = builder
            .build()
            .and_then(|c| c.try_deserialize())
            .map_err(config_error)?;
        loaded.source = source;
        Ok(loaded)
    }

    /// First implicit config file that exists.
    fn discover(project_root: &Path) -> Option<PathBuf> {
        [
            Some(Self::project_path(project_root)),
            Self::user_path(),
        ]
        .into_iter()
        .flatten()
        .find(|p| p.is_file())
    }

    /// `<project root>/.stratum.json`.
    pub fn project_path(project_root: &Path) -> PathBuf {
        project_root.join(PROJECT_CONFIG_FILE)
    }

    /// Per-user fallback, via `directories::ProjectDirs` for cross-platform
    /// correctness.
    pub fn user_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("dev", "stratum", "stratum")
            .map(|d| d.config_dir().join("config.json"))
    }

    /// Every setting with defaults spelled out, as `init` writes it and
    /// `config list` shows it.
    pub fn effective(&self) -> Self {
        Self {
            generator: self.generator.resolve().to_document(),
            output: self.output.clone(),
            source: self.source.clone(),
        }
    }

    /// Value of a dotted key such as `generator.idType` in the effective
    /// configuration.
    pub fn get(&self, key: &str) -> CliResult<serde_json::Value> {
        let document = self.to_json()?;
        key.split('.')
            .try_fold(&document, |node, part| node.get(part))
            .cloned()
            .ok_or_else(|| CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            })
    }

    /// Pretty JSON of the effective configuration.
    pub fn to_pretty_json(&self) -> CliResult<String> {
        serde_json::to_string_pretty(&self.effective()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }

    fn to_json(&self) -> CliResult<serde_json::Value> {
        serde_json::to_value(self.effective()).map_err(|e| CliError::ConfigError {
            message: format!("Failed to serialise config: {e}"),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stratum_core::domain::{IdType, InjectionStyle};
    use tempfile::TempDir;

    #[test]
    fn default_no_color_is_false() {
        assert!(!AppConfig::default().output.no_color);
    }

    #[test]
    fn load_without_file_resolves_defaults() {
        let dir = TempDir::new().unwrap();
        let cfg = AppConfig::load(None, dir.path()).unwrap();
        assert_eq!(cfg.generator.resolve().id_type, IdType::Uuid);
    }

    #[test]
    fn project_file_is_picked_up() {
        let dir = TempDir::new().unwrap();
        std::fs::write(
            dir.path().join(PROJECT_CONFIG_FILE),
            r#"{ "generator": { "idType": "LONG", "injection": "field" } }"#,
        )
        .unwrap();

        let cfg = AppConfig::load(None, dir.path()).unwrap();
        let resolved = cfg.generator.resolve();
        assert_eq!(resolved.id_type, IdType::Long);
        assert_eq!(resolved.injection, InjectionStyle::Field);
        assert_eq!(cfg.source, Some(dir.path().join(PROJECT_CONFIG_FILE)));
    }

    #[test]
    fn missing_explicit_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let err = AppConfig::load(Some(&dir.path().join("nope.json")), dir.path()).unwrap_err();
        assert_eq!(err.exit_code(), 4);
    }

    #[test]
    fn malformed_file_is_a_config_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(
            AppConfig::load(Some(&path), dir.path()),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn get_reads_effective_values() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.get("generator.idType").unwrap(), "UUID");
        assert_eq!(cfg.get("generator.transactional").unwrap(), true);
        assert_eq!(
            cfg.get("generator.layers.domain.folders").unwrap(),
            serde_json::json!(["entities", "enums", "exceptions"])
        );
    }

    #[test]
    fn get_unknown_key_is_error() {
        assert!(matches!(
            AppConfig::default().get("does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }
}
