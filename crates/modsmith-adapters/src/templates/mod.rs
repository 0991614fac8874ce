//! Built-in template catalog.
//!
//! [`BuiltinTemplates`] implements the `TemplateRenderer` port with texts
//! compiled into the binary. Rendering is pure: no clock, no randomness,
//! and the only platform dependence (the Gradle wrapper command in
//! `.vscode/tasks.json`) is fixed at compile time.

mod common;
mod component;
mod project;
mod vars;

use serde::Serialize;
use tracing::{debug, instrument};

use modsmith_core::{
    application::ports::{RenderedComponent, TemplateRenderer},
    domain::{ComponentOptions, ExistingProjectContext, ProjectConfig, TemplateFileSet, TemplateKind},
    error::ModsmithResult,
};

pub use common::WRAPPER_PROPERTIES_PATH;

/// Catalog entry for `list`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TemplateInfo {
    pub name: &'static str,
    pub description: &'static str,
    pub default: bool,
}

/// Templates shipped with modsmith.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinTemplates;

impl BuiltinTemplates {
    pub fn new() -> Self {
        Self
    }

    /// Every template kind with its description.
    pub fn catalog() -> Vec<TemplateInfo> {
        TemplateKind::ALL
            .iter()
            .map(|k| TemplateInfo {
                name: k.as_str(),
                description: k.description(),
                default: *k == TemplateKind::default(),
            })
            .collect()
    }
}

impl TemplateRenderer for BuiltinTemplates {
    #[instrument(skip_all, fields(template = %kind, mod_id = %config.mod_id()))]
    fn render_project(
        &self,
        kind: TemplateKind,
        config: &ProjectConfig,
    ) -> ModsmithResult<TemplateFileSet> {
        let files = match kind {
            TemplateKind::Basic => project::basic(config)?,
            TemplateKind::Item => project::item(config)?,
            TemplateKind::Qol => project::qol(config)?,
            TemplateKind::Empty => project::empty(config)?,
        };
        debug!(files = files.len(), "Rendered project template");
        Ok(files)
    }

    #[instrument(skip_all, fields(kind = %options.kind()))]
    fn render_component(
        &self,
        context: &ExistingProjectContext,
        options: &ComponentOptions,
    ) -> ModsmithResult<RenderedComponent> {
        component::render(context, options)
    }
}
