pub mod component;
pub mod file_set;
pub mod project_config;
pub mod project_context;

pub use crate::domain::DomainError;
pub use component::{
    AddedComponent, BuffOptions, ComponentOptions, ItemOptions, LocaleOutcome, MobOptions,
    TileOptions,
};
pub use file_set::TemplateFileSet;
pub use project_config::{
    DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_GAME_VERSION, DEFAULT_MOD_VERSION, ProjectConfig,
    ProjectConfigBuilder, validate_mod_id,
};
pub use project_context::ExistingProjectContext;
