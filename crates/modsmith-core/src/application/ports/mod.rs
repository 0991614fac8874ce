//! Application ports (traits) for external dependencies.
//!
//! Ports define what the application needs from the outside world.
//! Adapters in `modsmith-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `Filesystem`: directory creation, reads, writes, appends
//!   - `TemplateRenderer`: project and component text generation
//!   - `VersionControl`: repository initialization
//!
//! - **Driving (Input) Ports**: the services themselves, called by the CLI

pub mod output;

pub use output::{Filesystem, RenderedComponent, TemplateRenderer, VersionControl};
