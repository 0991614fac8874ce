//! Modsmith Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Modsmith
//! Necesse mod scaffolding tool, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           modsmith-cli (CLI)            │
//! │     (prompts, flags, exit codes)        │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (ScaffoldService, ProjectLocator,       │
//! │  ComponentService)                      │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │ (Filesystem, TemplateRenderer,          │
//! │  VersionControl)                        │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    modsmith-adapters (Infrastructure)   │
//! │ (LocalFilesystem, BuiltinTemplates,     │
//! │  GitCli)                                │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ProjectConfig, TemplateFileSet,        │
//! │  ComponentOptions, naming)              │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use modsmith_core::{
//!     application::ScaffoldService,
//!     domain::{ProjectConfig, TemplateKind},
//! };
//!
//! let config = ProjectConfig::builder("My Mod")
//!     .template(TemplateKind::Basic)
//!     .build()?;
//!
//! let service = ScaffoldService::new(renderer, filesystem, vcs);
//! service.scaffold(&config)?;
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ComponentService, ProjectLocator, ScaffoldService,
        ports::{Filesystem, TemplateRenderer, VersionControl},
    };
    pub use crate::domain::{
        ComponentKind, ComponentOptions, ExistingProjectContext, ProjectConfig, TemplateFileSet,
        TemplateKind,
    };
    pub use crate::error::{ModsmithError, ModsmithResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
