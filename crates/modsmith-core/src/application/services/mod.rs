//! Application services - orchestrate use cases.
//!
//! - `ScaffoldService`: render a template and write a new project
//! - `ProjectLocator`: find the mod containing a directory
//! - `ComponentService`: add an item, mob, tile or buff to a located mod

pub mod component_service;
pub mod locator_service;
pub mod scaffold_service;

pub use component_service::ComponentService;
pub use locator_service::{GradleManifest, ProjectLocator};
pub use scaffold_service::{MaterializeReport, ScaffoldPlan, ScaffoldService};
