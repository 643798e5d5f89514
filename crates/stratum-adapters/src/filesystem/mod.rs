//! [`Filesystem`](stratum_core::application::Filesystem) backends: the
//! real disk and a map-backed tree for tests.

mod local;
mod memory;

pub use local::LocalFilesystem;
pub use memory::MemoryFilesystem;
