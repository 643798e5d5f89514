//! Discovery Service - builds the [`ProjectStructure`] snapshot.
//!
//! The pipeline runs in one direction:
//! 1. Locate the project root (walk upward to a build descriptor)
//! 2. Locate the source tree (first existing candidate)
//! 3. Resolve the base namespace from the entry point
//! 4. Discover modules under the base namespace directory
//! 5. Scan each module's layers and classify their files
//!
//! Nothing is cached; each call re-reads the filesystem.

use std::collections::BTreeSet;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use tracing::{debug, info, instrument, warn};

use crate::{
    application::{
        ApplicationError,
        ports::{DirEntry, Filesystem},
    },
    domain::{
        ClassifiedFile, Layer, LayerStructure, ModuleStructure, ProjectStructure, ResourceIndex,
        classifier,
        conventions::{
            ENTRY_POINT_MARKER, ENTRY_POINT_SUFFIX, PROJECT_MARKERS, SOURCE_CANDIDATES,
            SOURCE_EXTENSION, namespace_to_path, path_to_namespace,
        },
    },
    error::StratumResult,
};

/// Scans a project on disk into an immutable [`ProjectStructure`].
pub struct DiscoveryService {
    filesystem: Box<dyn Filesystem>,
}

impl DiscoveryService {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Locate the project root and scan it.
    pub fn scan_from(&self, start: &Path) -> StratumResult<ProjectStructure> {
        let root = self.locate_root(start);
        self.scan(&root)
    }

    /// Scan a project whose root is already known.
    #[instrument(skip_all, fields(root = %root.display()))]
    pub fn scan(&self, root: &Path) -> StratumResult<ProjectStructure> {
        let source_root = self.locate_source_tree(root)?;
        let base_package = self.resolve_namespace(&source_root)?;
        let base_dir = source_root.join(namespace_to_path(&base_package));

        let modules = self
            .discover_modules(&base_dir)?
            .into_iter()
            .map(|entry| self.scan_module(&entry))
            .collect::<StratumResult<Vec<_>>>()?;

        info!(
            base_package = %base_package,
            modules = modules.len(),
            "Project scanned"
        );

        Ok(ProjectStructure::new(base_package, source_root, modules))
    }

    /// Walk upward from `start` looking for a build descriptor.
    ///
    /// Never fails: when no marker is found before the filesystem root, the
    /// original `start` directory is returned and callers must treat the
    /// result as advisory.
    pub fn locate_root(&self, start: &Path) -> PathBuf {
        let mut current = Some(start);
        while let Some(dir) = current {
            if let Some(marker) = PROJECT_MARKERS
                .iter()
                .find(|m| self.filesystem.exists(&dir.join(m)))
            {
                debug!(root = %dir.display(), marker, "Project root located");
                return dir.to_path_buf();
            }
            current = dir.parent();
        }

        warn!(
            start = %start.display(),
            "No project marker found, falling back to the start directory"
        );
        start.to_path_buf()
    }

    /// First existing source-root candidate under `root`.
    pub fn locate_source_tree(&self, root: &Path) -> StratumResult<PathBuf> {
        SOURCE_CANDIDATES
            .iter()
            .map(|candidate| root.join(candidate))
            .find(|path| self.filesystem.is_dir(path))
            .ok_or_else(|| {
                ApplicationError::ProjectNotFound {
                    root: root.to_path_buf(),
                    candidates: SOURCE_CANDIDATES.join(", "),
                }
                .into()
            })
    }

    /// Derive the base namespace from the entry point's directory.
    ///
    /// Returns an empty string when the entry point sits at the source root.
    pub fn resolve_namespace(&self, source_root: &Path) -> StratumResult<String> {
        let entry_point = self.find_entry_point(source_root)?;
        let dir = entry_point.parent().unwrap_or(source_root);
        let relative = dir.strip_prefix(source_root).unwrap_or(Path::new(""));
        let namespace = path_to_namespace(relative);

        debug!(
            entry_point = %entry_point.display(),
            namespace = %namespace,
            "Base namespace resolved"
        );
        Ok(namespace)
    }

    fn find_entry_point(&self, source_root: &Path) -> StratumResult<PathBuf> {
        for path in self.filesystem.walk_files(source_root)? {
            let is_candidate = path
                .file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.ends_with(ENTRY_POINT_SUFFIX));
            if is_candidate
                && self
                    .filesystem
                    .read_to_string(&path)?
                    .contains(ENTRY_POINT_MARKER)
            {
                return Ok(path);
            }
        }

        Err(ApplicationError::EntryPointNotFound {
            source_root: source_root.to_path_buf(),
            suffix: ENTRY_POINT_SUFFIX,
            marker: ENTRY_POINT_MARKER,
        }
        .into())
    }

    /// Immediate subdirectories of `base_dir` that look like layered modules.
    ///
    /// Directories without any layer child are skipped silently.
    pub fn discover_modules(&self, base_dir: &Path) -> StratumResult<Vec<DirEntry>> {
        if !self.filesystem.is_dir(base_dir) {
            return Ok(Vec::new());
        }

        let mut modules = Vec::new();
        for entry in self.filesystem.list_dir(base_dir)? {
            if !entry.is_dir {
                continue;
            }
            let children = self.filesystem.list_dir(&entry.path)?;
            if children
                .iter()
                .any(|c| Layer::matches_dir_name(&c.name).is_some())
            {
                modules.push(entry);
            } else {
                debug!(dir = %entry.name, "Skipping non-module directory");
            }
        }
        Ok(modules)
    }

    /// Scan every fixed layer of one module.
    #[instrument(skip_all, fields(module = %module.name))]
    pub fn scan_module(&self, module: &DirEntry) -> StratumResult<ModuleStructure> {
        let children = self.filesystem.list_dir(&module.path)?;
        let mut structure = ModuleStructure::new(&module.name, &module.path);

        for layer in Layer::ALL {
            let layer_dir = children
                .iter()
                .find(|c| c.is_dir && Layer::matches_dir_name(&c.name) == Some(layer))
                .map(|c| c.path.clone());

            let scanned = match layer_dir {
                Some(dir) => Some(self.scan_layer(&dir)?),
                None => None,
            };
            structure = structure.with_layer(layer, scanned);
        }

        Ok(structure)
    }

    /// Collect the subdirectories and classified resources of a present layer.
    pub fn scan_layer(&self, layer_dir: &Path) -> StratumResult<LayerStructure> {
        let directories: BTreeSet<String> = self
            .filesystem
            .list_dir(layer_dir)?
            .into_iter()
            .filter(|e| e.is_dir)
            .map(|e| e.name)
            .collect();

        let sources: Vec<PathBuf> = self
            .filesystem
            .walk_files(layer_dir)?
            .into_iter()
            .filter(|p| p.extension().is_some_and(|ext| ext == SOURCE_EXTENSION))
            .collect();

        // Reading and classifying is independent per file; the merge is a
        // single-threaded reduction afterwards.
        let classified = sources
            .par_iter()
            .map(|path| self.classify_file(path))
            .collect::<StratumResult<Vec<_>>>()?;

        let mut index = ResourceIndex::new();
        for file in classified {
            index.upsert(file);
        }
        debug!(
            layer = %layer_dir.display(),
            files = sources.len(),
            resources = index.len(),
            "Layer scanned"
        );

        Ok(LayerStructure {
            path: layer_dir.to_path_buf(),
            directories,
            resources: index.into_records(),
        })
    }

    fn classify_file(&self, path: &Path) -> StratumResult<ClassifiedFile> {
        let content = self.filesystem.read_to_string(path)?;
        let stem = path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or_default()
            .to_string();
        let classification = classifier::classify(&stem, &content);

        Ok(ClassifiedFile {
            stem,
            path: path.to_path_buf(),
            classification,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::ports::MockFilesystem;
    use crate::error::StratumError;

    fn dir(path: &str) -> DirEntry {
        let path = PathBuf::from(path);
        DirEntry {
            name: path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or_default()
                .to_string(),
            path,
            is_dir: true,
        }
    }

    #[test]
    fn root_is_the_nearest_ancestor_with_a_marker() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists()
            .returning(|p| p == Path::new("/work/shop/build.gradle.kts"));

        let root = DiscoveryService::new(Box::new(fs)).locate_root(Path::new("/work/shop/src/main"));
        assert_eq!(root, PathBuf::from("/work/shop"));
    }

    #[test]
    fn root_falls_back_to_start() {
        let mut fs = MockFilesystem::new();
        fs.expect_exists().returning(|_| false);

        let root = DiscoveryService::new(Box::new(fs)).locate_root(Path::new("/tmp/loose"));
        assert_eq!(root, PathBuf::from("/tmp/loose"));
    }

    #[test]
    fn source_candidates_are_tried_in_order() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir()
            .returning(|p| p == Path::new("/p/src/main/kotlin") || p == Path::new("/p/src"));

        let source = DiscoveryService::new(Box::new(fs))
            .locate_source_tree(Path::new("/p"))
            .unwrap();
        assert_eq!(source, PathBuf::from("/p/src/main/kotlin"));
    }

    #[test]
    fn namespace_comes_from_the_marked_entry_point() {
        let mut fs = MockFilesystem::new();
        fs.expect_walk_files().returning(|_| {
            Ok(vec![
                PathBuf::from("/s/com/acme/shop/util/Helper.java"),
                PathBuf::from("/s/com/acme/shop/legacy/OldApplication.java"),
                PathBuf::from("/s/com/acme/shop/ShopApplication.java"),
            ])
        });
        fs.expect_read_to_string().returning(|p| {
            Ok(if p.ends_with("ShopApplication.java") {
                "@SpringBootApplication\npublic class ShopApplication {}".to_string()
            } else {
                "public class OldApplication {}".to_string()
            })
        });

        let namespace = DiscoveryService::new(Box::new(fs))
            .resolve_namespace(Path::new("/s"))
            .unwrap();
        assert_eq!(namespace, "com.acme.shop");
    }

    #[test]
    fn unmarked_application_file_is_not_an_entry_point() {
        let mut fs = MockFilesystem::new();
        fs.expect_walk_files()
            .returning(|_| Ok(vec![PathBuf::from("/s/com/acme/DemoApplication.java")]));
        fs.expect_read_to_string()
            .returning(|_| Ok("public class DemoApplication {}".to_string()));

        let err = DiscoveryService::new(Box::new(fs))
            .resolve_namespace(Path::new("/s"))
            .unwrap_err();
        assert!(matches!(
            err,
            StratumError::Application(ApplicationError::EntryPointNotFound { .. })
        ));
    }

    #[test]
    fn modules_need_a_layer_child_in_any_case() {
        let mut fs = MockFilesystem::new();
        fs.expect_is_dir().returning(|_| true);
        fs.expect_list_dir().returning(|p| {
            let children = match p.to_str().unwrap_or_default() {
                "/base" => vec![
                    dir("/base/sales"),
                    dir("/base/docs"),
                    DirEntry {
                        name: "README.md".into(),
                        path: PathBuf::from("/base/README.md"),
                        is_dir: false,
                    },
                ],
                "/base/sales" => vec![dir("/base/sales/Domain")],
                "/base/docs" => vec![dir("/base/docs/images")],
                _ => vec![],
            };
            Ok(children)
        });

        let modules = DiscoveryService::new(Box::new(fs))
            .discover_modules(Path::new("/base"))
            .unwrap();
        let names: Vec<_> = modules.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, ["sales"]);
    }
}
