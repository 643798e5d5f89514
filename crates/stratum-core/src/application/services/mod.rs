//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the three
//! use cases: scan a project, generate a resource, scaffold a module.

pub mod discovery_service;
pub mod generation_service;
pub mod module_service;

pub use discovery_service::DiscoveryService;
pub use generation_service::GenerationOrchestrator;
pub use module_service::ModuleScaffolder;
