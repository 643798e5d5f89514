use std::path::PathBuf;

use serde::Serialize;

use crate::domain::value_objects::{IdType, ResourceKind};

/// Name of the resource to generate.
///
/// Service and controller kinds distinguish entity-based generation (built
/// against an existing entity) from standalone generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResourceName {
    Plain(String),
    Structured { name: String, entity_based: bool },
}

impl ResourceName {
    pub fn name(&self) -> &str {
        match self {
            Self::Plain(name) | Self::Structured { name, .. } => name,
        }
    }

    /// Plain names are treated as entity-based.
    pub fn is_entity_based(&self) -> bool {
        match self {
            Self::Plain(_) => true,
            Self::Structured { entity_based, .. } => *entity_based,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationOptions {
    pub id_type: Option<IdType>,
}

/// A validated request to generate one resource kind.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationRequest {
    pub name: ResourceName,
    pub kind: ResourceKind,
    pub module: String,
    pub options: GenerationOptions,
}

impl GenerationRequest {
    pub fn new(kind: ResourceKind, name: impl Into<String>, module: impl Into<String>) -> Self {
        let name = name.into();
        let name = if kind.has_standalone_mode() {
            ResourceName::Structured {
                name,
                entity_based: true,
            }
        } else {
            ResourceName::Plain(name)
        };
        Self {
            name,
            kind,
            module: module.into(),
            options: GenerationOptions::default(),
        }
    }

    /// Switch service/controller requests to standalone mode.
    pub fn standalone(mut self) -> Self {
        if let ResourceName::Structured { entity_based, .. } = &mut self.name {
            *entity_based = false;
        }
        self
    }

    pub fn with_id_type(mut self, id_type: Option<IdType>) -> Self {
        self.options.id_type = id_type;
        self
    }
}

/// Files produced by a generation call, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationResult {
    pub created_files: Vec<PathBuf>,
    /// Subset of `created_files` that already existed and were replaced.
    pub overwritten_files: Vec<PathBuf>,
}

impl GenerationResult {
    pub fn extend(&mut self, other: GenerationResult) {
        self.created_files.extend(other.created_files);
        self.overwritten_files.extend(other.overwritten_files);
    }
}

/// Outcome of scaffolding a module skeleton.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleScaffoldResult {
    pub module_name: String,
    pub base_path: PathBuf,
    /// Every directory touched, in creation order.
    pub created_paths: Vec<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn service_requests_are_structured_and_entity_based() {
        let req = GenerationRequest::new(ResourceKind::Service, "Order", "sales");
        assert!(req.name.is_entity_based());
        assert!(!req.standalone().name.is_entity_based());
    }

    #[test]
    fn standalone_has_no_effect_on_plain_kinds() {
        let req = GenerationRequest::new(ResourceKind::Entity, "Order", "sales").standalone();
        assert_eq!(req.name, ResourceName::Plain("Order".into()));
    }
}
