//! Source-tree conventions for layered Spring Boot projects.
//!
//! Every fixed marker, candidate path and naming suffix the discovery and
//! generation code relies on is declared here.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::domain::value_objects::Layer;

/// Build descriptors that identify a project root.
pub const PROJECT_MARKERS: &[&str] = &["pom.xml", "build.gradle", "build.gradle.kts"];

/// Candidate source roots relative to the project root, checked in order.
pub const SOURCE_CANDIDATES: &[&str] = &["src/main/java", "src/main/kotlin", "src"];

/// File-name suffix of the application entry point.
pub const ENTRY_POINT_SUFFIX: &str = "Application.java";

/// Token that must appear in the entry point's content.
pub const ENTRY_POINT_MARKER: &str = "@SpringBootApplication";

/// Extension of classifiable source files.
pub const SOURCE_EXTENSION: &str = "java";

/// Suffix marking an implementation file.
pub const IMPLEMENTATION_SUFFIX: &str = "Impl";

/// Suffixes marking a data-transfer object.
pub const DTO_SUFFIXES: &[&str] = &["DTO", "Dto"];

/// Sub-directory holding implementations of services and mappers.
pub const IMPLEMENTATIONS_DIR: &str = "implementations";

/// Folders that receive a nested `implementations` directory when scaffolded.
pub const FOLDERS_WITH_IMPLEMENTATIONS: &[&str] = &["services", "mappers"];

/// Namespace separator for packages.
pub const NAMESPACE_SEPARATOR: &str = ".";

/// Convert a dotted namespace into a relative path.
///
/// An empty namespace yields an empty path.
pub fn namespace_to_path(namespace: &str) -> PathBuf {
    namespace
        .split(NAMESPACE_SEPARATOR)
        .filter(|segment| !segment.is_empty())
        .collect()
}

/// Join the segments of a relative path with the namespace separator.
pub fn path_to_namespace(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|c| c.as_os_str().to_str())
        .filter(|s| !s.is_empty() && *s != ".")
        .collect::<Vec<_>>()
        .join(NAMESPACE_SEPARATOR)
}

/// Conventional locations of generated artifacts inside a module root.
///
/// Layers default to their lowercase directory name. A layer directory that
/// already exists under another casing (`Domain/`) is registered with
/// [`ModuleLayout::with_layer_dir`] so reads and writes land in it.
#[derive(Debug, Clone)]
pub struct ModuleLayout {
    root: PathBuf,
    layer_dirs: BTreeMap<Layer, PathBuf>,
}

impl ModuleLayout {
    pub fn new(module_root: impl Into<PathBuf>) -> Self {
        Self {
            root: module_root.into(),
            layer_dirs: BTreeMap::new(),
        }
    }

    pub fn with_layer_dir(mut self, layer: Layer, dir: impl Into<PathBuf>) -> Self {
        self.layer_dirs.insert(layer, dir.into());
        self
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn layer_dir(&self, layer: Layer) -> PathBuf {
        self.layer_dirs
            .get(&layer)
            .cloned()
            .unwrap_or_else(|| self.root.join(layer.as_str()))
    }

    pub fn entities_dir(&self) -> PathBuf {
        self.layer_dir(Layer::Domain).join("entities")
    }

    pub fn repositories_dir(&self) -> PathBuf {
        self.layer_dir(Layer::Infrastructure).join("repositories")
    }

    pub fn services_dir(&self) -> PathBuf {
        self.layer_dir(Layer::Application).join("services")
    }

    pub fn service_implementations_dir(&self) -> PathBuf {
        self.services_dir().join(IMPLEMENTATIONS_DIR)
    }

    pub fn controllers_dir(&self) -> PathBuf {
        self.layer_dir(Layer::Infrastructure).join("controllers")
    }

    pub fn entity_file(&self, class_name: &str) -> PathBuf {
        self.entities_dir().join(java_file(class_name))
    }

    pub fn repository_file(&self, class_name: &str) -> PathBuf {
        self.repositories_dir()
            .join(java_file(&format!("{class_name}Repository")))
    }

    /// Interface file of a service whose full type name is `service_name`.
    pub fn service_file(&self, service_name: &str) -> PathBuf {
        self.services_dir().join(java_file(service_name))
    }

    pub fn service_impl_file(&self, service_name: &str) -> PathBuf {
        self.service_implementations_dir()
            .join(java_file(&format!("{service_name}{IMPLEMENTATION_SUFFIX}")))
    }

    pub fn controller_file(&self, controller_name: &str) -> PathBuf {
        self.controllers_dir().join(java_file(controller_name))
    }
}

fn java_file(type_name: &str) -> String {
    format!("{type_name}.{SOURCE_EXTENSION}")
}
