pub mod config;
pub mod generation;
pub mod project_structure;
pub mod render_context;

pub use crate::domain::DomainError;
pub use config::{GeneratorConfig, ResolvedConfig};
pub use generation::{GenerationRequest, GenerationResult, ModuleScaffoldResult};
pub use project_structure::{ProjectStructure, ResourceIndex, ResourceRecord};
pub use render_context::RenderContext;
