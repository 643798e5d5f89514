//! Module Scaffolder - creates the directory skeleton of a new module.

use std::path::{Path, PathBuf};

use tracing::{info, instrument};

use crate::{
    application::ports::Filesystem,
    domain::{
        ModuleScaffoldResult, ProjectStructure, ResolvedConfig,
        conventions::{FOLDERS_WITH_IMPLEMENTATIONS, IMPLEMENTATIONS_DIR},
        naming,
    },
    error::StratumResult,
};

pub struct ModuleScaffolder {
    filesystem: Box<dyn Filesystem>,
    config: ResolvedConfig,
}

impl ModuleScaffolder {
    pub fn new(filesystem: Box<dyn Filesystem>, config: ResolvedConfig) -> Self {
        Self { filesystem, config }
    }

    /// Create `<base package dir>/<module>` with every enabled layer and its
    /// folders.
    ///
    /// Idempotent: existing directories are left alone and still reported,
    /// so a second call returns the same paths.
    #[instrument(skip_all, fields(module = %module_name))]
    pub fn generate(
        &self,
        project: &ProjectStructure,
        module_name: &str,
    ) -> StratumResult<ModuleScaffoldResult> {
        naming::validate_module_name(module_name)?;

        let base_path = project.base_package_dir().join(module_name);
        let mut created_paths = Vec::new();
        self.create(&base_path, &mut created_paths)?;

        for layer in self.config.enabled_layers() {
            let layer_dir = base_path.join(layer.layer.as_str());
            self.create(&layer_dir, &mut created_paths)?;

            for folder in &layer.folders {
                let folder_dir = layer_dir.join(folder);
                self.create(&folder_dir, &mut created_paths)?;

                if FOLDERS_WITH_IMPLEMENTATIONS.contains(&folder.as_str()) {
                    self.create(&folder_dir.join(IMPLEMENTATIONS_DIR), &mut created_paths)?;
                }
            }
        }

        info!(
            path = %base_path.display(),
            directories = created_paths.len(),
            "Module scaffolded"
        );

        Ok(ModuleScaffoldResult {
            module_name: module_name.to_string(),
            base_path,
            created_paths,
        })
    }

    fn create(&self, path: &Path, created: &mut Vec<PathBuf>) -> StratumResult<()> {
        self.filesystem.create_dir_all(path)?;
        created.push(path.to_path_buf());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::domain::{GeneratorConfig, LayerConfig, LayersConfig};

    fn project() -> ProjectStructure {
        ProjectStructure::new("com.acme", "/p/src/main/java", vec![])
    }

    fn permissive_fs() -> MockFilesystem {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().returning(|_| Ok(()));
        fs
    }

    #[test]
    fn default_layout_creates_every_folder_in_order() {
        let scaffolder = ModuleScaffolder::new(
            Box::new(permissive_fs()),
            GeneratorConfig::default().resolve(),
        );

        let result = scaffolder.generate(&project(), "billing").unwrap();
        let base = Path::new("/p/src/main/java/com/acme/billing");
        assert_eq!(result.base_path, base);
        assert_eq!(result.created_paths[0], base);
        assert_eq!(result.created_paths[1], base.join("application"));
        assert_eq!(result.created_paths[2], base.join("application/services"));
        assert_eq!(
            result.created_paths[3],
            base.join("application/services/implementations")
        );
        // base + 3 layers + 9 folders + 2 implementations dirs
        assert_eq!(result.created_paths.len(), 15);
    }

    #[test]
    fn disabled_layers_are_skipped() {
        let config = GeneratorConfig {
            layers: Some(LayersConfig {
                application: Some(LayerConfig {
                    enabled: Some(false),
                    folders: None,
                }),
                infrastructure: Some(LayerConfig {
                    enabled: Some(false),
                    folders: None,
                }),
                ..Default::default()
            }),
            ..Default::default()
        };
        let scaffolder = ModuleScaffolder::new(Box::new(permissive_fs()), config.resolve());

        let result = scaffolder.generate(&project(), "core").unwrap();
        assert!(
            result
                .created_paths
                .iter()
                .all(|p| !p.starts_with("/p/src/main/java/com/acme/core/application"))
        );
        assert!(
            result
                .created_paths
                .contains(&PathBuf::from("/p/src/main/java/com/acme/core/domain/enums"))
        );
    }

    #[test]
    fn invalid_module_name_creates_nothing() {
        let mut fs = MockFilesystem::new();
        fs.expect_create_dir_all().never();
        let scaffolder = ModuleScaffolder::new(Box::new(fs), GeneratorConfig::default().resolve());

        assert!(scaffolder.generate(&project(), "Billing").is_err());
        assert!(scaffolder.generate(&project(), "bill-ing").is_err());
    }
}
