//! Application layer for Modsmith.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ScaffoldService, ProjectLocator,
//!   ComponentService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Those live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ComponentService, MaterializeReport, ProjectLocator, ScaffoldService};

pub use ports::{Filesystem, TemplateRenderer, VersionControl};

pub use error::ApplicationError;
