//! Driven (output) ports - implemented by infrastructure.
//!
//! The `modsmith-adapters` crate provides the implementations.

use std::path::Path;

use crate::domain::{
    ComponentOptions, ExistingProjectContext, ProjectConfig, TemplateFileSet, TemplateKind,
};
use crate::error::ModsmithResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `modsmith_adapters::filesystem::LocalFilesystem` (production)
/// - `modsmith_adapters::filesystem::MemoryFilesystem` (testing)
///
/// Every call completes before returning; services issue them strictly in
/// sequence.
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Existing dirs are fine.
    fn create_dir_all(&self, path: &Path) -> ModsmithResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> ModsmithResult<()>;

    /// Read a whole file as UTF-8.
    fn read_to_string(&self, path: &Path) -> ModsmithResult<String>;

    /// Append content to an existing file.
    fn append_file(&self, path: &Path, content: &str) -> ModsmithResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Check if path exists and is a directory.
    fn is_dir(&self, path: &Path) -> bool;
}

/// A single rendered component source file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedComponent {
    /// File name only, e.g. `FireSword.java`.
    pub file_name: String,
    pub content: String,
}

/// Port for text generation.
///
/// Implemented by:
/// - `modsmith_adapters::templates::BuiltinTemplates`
///
/// Both operations must be pure: identical inputs give identical output.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateRenderer: Send + Sync {
    /// Render every file of a project skeleton.
    fn render_project(
        &self,
        kind: TemplateKind,
        config: &ProjectConfig,
    ) -> ModsmithResult<TemplateFileSet>;

    /// Render the Java source for one component.
    fn render_component(
        &self,
        context: &ExistingProjectContext,
        options: &ComponentOptions,
    ) -> ModsmithResult<RenderedComponent>;
}

/// Port for initializing a repository in a freshly generated project.
///
/// Implemented by:
/// - `modsmith_adapters::vcs::GitCli`
#[cfg_attr(test, mockall::automock)]
pub trait VersionControl: Send + Sync {
    fn init(&self, path: &Path) -> ModsmithResult<()>;
}
