//! Infrastructure adapters for Modsmith.
//!
//! This crate implements the ports defined in `modsmith-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod filesystem;
pub mod templates;
pub mod vcs;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use templates::{BuiltinTemplates, TemplateInfo};
pub use vcs::GitCli;
