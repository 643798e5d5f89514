//! Core domain layer for Stratum.
//!
//! Pure logic: the shape of a discovered project, the classification
//! heuristic, naming rules and the configuration record. All I/O is done by
//! the application layer through ports.
//!
//! - **No I/O**: No filesystem, network, or external calls
//! - **Immutable snapshots**: `ProjectStructure` is never mutated after a scan
//! - **Closed variants**: classification results and template ids are enums
//!
// Public API - what the world sees
pub mod classifier;
pub mod conventions;
pub mod entities;
pub mod error;
pub mod naming;
pub mod value_objects;

// Re-exports for convenience
pub use entities::{
    config::{GeneratorConfig, LayerConfig, LayersConfig, ResolvedConfig, ResolvedLayer},
    generation::{
        GenerationOptions, GenerationRequest, GenerationResult, ModuleScaffoldResult,
        ResourceName,
    },
    project_structure::{
        ClassifiedFile, LayerStructure, ModuleStructure, ProjectStructure, ResourceIndex,
        ResourceRecord,
    },
    render_context::RenderContext,
};

pub use classifier::Classification;
pub use conventions::ModuleLayout;
pub use error::{DomainError, ErrorCategory};

pub use value_objects::{
    IdType, InjectionStyle, Layer, MapperType, ResourceKind, ResourceType, TemplateId,
};
