//! Project discovery and code generation for layered Spring Boot projects.
//!
//! `domain` holds the pure rules: naming, classification, layer and
//! resource types, the generation request and the configuration document.
//! `application` sequences those rules over two ports, [`Filesystem`] and
//! [`TemplateRenderer`], which `stratum-adapters` implements.
//!
//! [`Filesystem`]: application::ports::Filesystem
//! [`TemplateRenderer`]: application::ports::TemplateRenderer
//!
//! ```rust,no_run
//! use stratum_core::prelude::*;
//!
//! # fn run(fs: Box<dyn Filesystem>) -> StratumResult<()> {
//! let project = DiscoveryService::new(fs).scan_from(std::path::Path::new("."))?;
//! for module in project.modules() {
//!     println!("{}: {} resources", module.name, module.resources().count());
//! }
//! # Ok(())
//! # }
//! ```

pub mod application;
pub mod domain;
pub mod error;

/// Everything a front end or adapter usually needs.
pub mod prelude {
    pub use crate::application::{
        DiscoveryService, GenerationOrchestrator, ModuleScaffolder,
        ports::{DirEntry, Filesystem, TemplateRenderer},
    };
    pub use crate::domain::{
        GenerationRequest, GenerationResult, GeneratorConfig, IdType, Layer,
        ModuleScaffoldResult, ProjectStructure, RenderContext, ResolvedConfig, ResourceKind,
        ResourceRecord, ResourceType, TemplateId,
    };
    pub use crate::error::{ErrorCategory, StratumError, StratumResult};
}
