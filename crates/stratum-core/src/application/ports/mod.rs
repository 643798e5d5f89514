//! Traits the services call out through. Only driven ports exist; the CLI
//! calls services directly.

pub mod output;

pub use output::{DirEntry, Filesystem, TemplateRenderer};

#[cfg(test)]
pub use output::{MockFilesystem, MockTemplateRenderer};
