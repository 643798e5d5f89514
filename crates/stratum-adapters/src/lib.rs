//! Port implementations for `stratum-core`: disk and in-memory filesystems,
//! the bundled Java templates, and the placeholder renderer.

pub mod builtin_templates;
pub mod filesystem;
pub mod renderer;
pub mod template_loader;
pub mod template_store;

pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use renderer::SimpleRenderer;
pub use template_store::InMemoryStore;
