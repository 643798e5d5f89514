//! Use cases over the filesystem: scanning a project, generating resources
//! into a module, and scaffolding new modules.

pub mod error;
pub mod ports;
pub mod services;

pub use error::ApplicationError;
pub use ports::{DirEntry, Filesystem, TemplateRenderer};
pub use services::{DiscoveryService, GenerationOrchestrator, ModuleScaffolder};
