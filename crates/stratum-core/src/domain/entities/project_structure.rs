use std::collections::{BTreeMap, BTreeSet};
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::classifier::{self, Classification};
use crate::domain::conventions::ModuleLayout;
use crate::domain::value_objects::{Layer, MapperType, ResourceType};

/// Snapshot of a discovered project.
///
/// Built once per scan and immutable afterwards. Every invocation re-scans;
/// nothing is cached between calls.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectStructure {
    pub(crate) base_package: String,
    pub(crate) source_path: PathBuf,
    pub(crate) modules: Vec<ModuleStructure>,
    pub(crate) timestamp: DateTime<Utc>,
}

impl ProjectStructure {
    pub fn new(
        base_package: impl Into<String>,
        source_path: impl Into<PathBuf>,
        modules: Vec<ModuleStructure>,
    ) -> Self {
        Self {
            base_package: base_package.into(),
            source_path: source_path.into(),
            modules,
            timestamp: Utc::now(),
        }
    }

    /// Dotted base namespace. May be empty when the entry point sits at the
    /// source root.
    pub fn base_package(&self) -> &str {
        &self.base_package
    }

    pub fn source_path(&self) -> &Path {
        &self.source_path
    }

    /// Directory corresponding to the base namespace.
    pub fn base_package_dir(&self) -> PathBuf {
        self.source_path
            .join(crate::domain::conventions::namespace_to_path(&self.base_package))
    }

    pub fn modules(&self) -> &[ModuleStructure] {
        &self.modules
    }

    pub fn module(&self, name: &str) -> Option<&ModuleStructure> {
        self.modules.iter().find(|m| m.name == name)
    }

    pub fn module_names(&self) -> Vec<&str> {
        self.modules.iter().map(|m| m.name.as_str()).collect()
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Package of a module: `<base>.<module>`, or just the module when the
    /// base namespace is empty.
    pub fn module_package(&self, module: &str) -> String {
        if self.base_package.is_empty() {
            module.to_string()
        } else {
            format!("{}.{}", self.base_package, module)
        }
    }
}

/// A top-level functional grouping holding the fixed layers.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleStructure {
    pub name: String,
    pub path: PathBuf,
    /// `None` means the layer directory does not exist, which is distinct
    /// from a present-but-empty layer.
    pub layers: BTreeMap<Layer, Option<LayerStructure>>,
}

impl ModuleStructure {
    pub fn new(name: impl Into<String>, path: impl Into<PathBuf>) -> Self {
        Self {
            name: name.into(),
            path: path.into(),
            layers: Layer::ALL.into_iter().map(|l| (l, None)).collect(),
        }
    }

    pub fn with_layer(mut self, layer: Layer, structure: Option<LayerStructure>) -> Self {
        self.layers.insert(layer, structure);
        self
    }

    pub fn layer(&self, layer: Layer) -> Option<&LayerStructure> {
        self.layers.get(&layer).and_then(Option::as_ref)
    }

    /// Artifact paths for this module, reusing each scanned layer directory
    /// as found on disk.
    pub fn layout(&self) -> ModuleLayout {
        Layer::ALL
            .into_iter()
            .filter_map(|layer| self.layer(layer).map(|found| (layer, found.path.clone())))
            .fold(ModuleLayout::new(&self.path), |layout, (layer, dir)| {
                layout.with_layer_dir(layer, dir)
            })
    }

    /// All resources across present layers.
    pub fn resources(&self) -> impl Iterator<Item = &ResourceRecord> {
        self.layers
            .values()
            .flatten()
            .flat_map(|layer| layer.resources.iter())
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LayerStructure {
    pub path: PathBuf,
    pub directories: BTreeSet<String>,
    pub resources: Vec<ResourceRecord>,
}

/// One logical resource, possibly backed by an interface and an
/// implementation file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResourceRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub resource_type: ResourceType,
    pub path: PathBuf,
    pub implementation: Option<String>,
    pub mapper_type: MapperType,
}

/// A file that has been read and classified, ready to merge.
#[derive(Debug, Clone)]
pub struct ClassifiedFile {
    pub stem: String,
    pub path: PathBuf,
    pub classification: Classification,
}

#[derive(Debug, Clone)]
struct IndexEntry {
    resource_type: ResourceType,
    mapper_type: MapperType,
    path: PathBuf,
    implementation: Option<String>,
    has_interface: bool,
}

/// Per-layer map of merge key → resource, with an order-independent upsert.
///
/// Invariant: at most one entry per key; an implementation never overwrites
/// a type recorded from its interface file.
#[derive(Debug, Default)]
pub struct ResourceIndex {
    entries: BTreeMap<String, IndexEntry>,
}

impl ResourceIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn upsert(&mut self, file: ClassifiedFile) {
        let is_impl = classifier::is_implementation(&file.stem);
        let key = classifier::merge_key(&file.stem).to_string();
        let Classification {
            resource_type,
            mapper_type,
        } = file.classification;

        match self.entries.get_mut(&key) {
            None => {
                self.entries.insert(
                    key,
                    IndexEntry {
                        resource_type,
                        mapper_type,
                        path: file.path,
                        implementation: is_impl.then_some(file.stem),
                        has_interface: !is_impl,
                    },
                );
            }
            Some(entry) if is_impl => {
                entry.implementation = Some(file.stem);
                if !entry.has_interface {
                    entry.path = file.path;
                    entry.resource_type = resource_type;
                    entry.mapper_type = mapper_type;
                } else if entry.resource_type == ResourceType::Unknown {
                    entry.resource_type = resource_type;
                    entry.mapper_type = mapper_type;
                }
            }
            Some(entry) => {
                // Interface arriving after its implementation takes over the
                // record, unless it carries no signal of its own.
                entry.has_interface = true;
                entry.path = file.path;
                if resource_type != ResourceType::Unknown {
                    entry.resource_type = resource_type;
                    entry.mapper_type = mapper_type;
                }
            }
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Finish the index into records ordered by merge key.
    pub fn into_records(self) -> Vec<ResourceRecord> {
        self.entries
            .into_iter()
            .map(|(key, entry)| ResourceRecord {
                name: classifier::logical_name(&key, entry.resource_type),
                resource_type: entry.resource_type,
                path: entry.path,
                implementation: entry.implementation,
                mapper_type: entry.mapper_type,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::classifier::classify;

    fn classified(stem: &str, content: &str) -> ClassifiedFile {
        ClassifiedFile {
            stem: stem.to_string(),
            path: PathBuf::from(format!("/x/{stem}.java")),
            classification: classify(stem, content),
        }
    }

    const INTERFACE: &str = "public interface FooService {}";
    const IMPL: &str = "@Service\npublic class FooServiceImpl implements FooService {}";

    #[test]
    fn interface_then_implementation_merges() {
        let mut index = ResourceIndex::new();
        index.upsert(classified("FooService", INTERFACE));
        index.upsert(classified("FooServiceImpl", IMPL));

        let records = index.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Foo");
        assert_eq!(records[0].resource_type, ResourceType::Service);
        assert_eq!(records[0].implementation.as_deref(), Some("FooServiceImpl"));
        assert_eq!(records[0].path, PathBuf::from("/x/FooService.java"));
    }

    #[test]
    fn implementation_then_interface_merges_identically() {
        let mut forward = ResourceIndex::new();
        forward.upsert(classified("FooService", INTERFACE));
        forward.upsert(classified("FooServiceImpl", IMPL));

        let mut reverse = ResourceIndex::new();
        reverse.upsert(classified("FooServiceImpl", IMPL));
        reverse.upsert(classified("FooService", INTERFACE));

        assert_eq!(forward.into_records(), reverse.into_records());
    }

    #[test]
    fn implementation_never_overwrites_interface_type() {
        let mut index = ResourceIndex::new();
        index.upsert(classified(
            "OrderMapper",
            "@Mapper(componentModel = \"spring\")\npublic interface OrderMapper {}",
        ));
        index.upsert(classified(
            "OrderMapperImpl",
            "@Service\npublic class OrderMapperImpl implements OrderMapper {}",
        ));

        let records = index.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].resource_type, ResourceType::Mapper);
        assert_eq!(records[0].mapper_type, MapperType::FrameworkMapper);
        assert_eq!(records[0].name, "Order");
    }

    #[test]
    fn lone_implementation_starts_its_own_record() {
        let mut index = ResourceIndex::new();
        index.upsert(classified("BarServiceImpl", "@Service\nclass BarServiceImpl {}"));

        let records = index.into_records();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Bar");
        assert_eq!(records[0].implementation.as_deref(), Some("BarServiceImpl"));
    }

    #[test]
    fn module_starts_with_every_layer_absent() {
        let module = ModuleStructure::new("billing", "/src/billing");
        assert_eq!(module.layers.len(), 3);
        assert!(Layer::ALL.iter().all(|l| module.layer(*l).is_none()));
    }

    #[test]
    fn module_package_handles_empty_base() {
        let structure = ProjectStructure::new("", "/src", vec![]);
        assert_eq!(structure.module_package("billing"), "billing");
        let structure = ProjectStructure::new("com.acme", "/src", vec![]);
        assert_eq!(structure.module_package("billing"), "com.acme.billing");
    }

    #[test]
    fn layout_follows_scanned_layer_casing() {
        let domain = LayerStructure {
            path: PathBuf::from("/m/Domain"),
            directories: BTreeSet::from(["entities".to_string()]),
            resources: Vec::new(),
        };
        let module = ModuleStructure::new("billing", "/m").with_layer(Layer::Domain, Some(domain));

        let layout = module.layout();
        assert_eq!(layout.layer_dir(Layer::Domain), PathBuf::from("/m/Domain"));
        assert_eq!(
            layout.layer_dir(Layer::Application),
            PathBuf::from("/m/application")
        );
    }
}
