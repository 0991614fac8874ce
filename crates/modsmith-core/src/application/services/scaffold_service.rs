//! Scaffold Service - creates a new mod project.
//!
//! Workflow:
//! 1. Render the chosen template into a `TemplateFileSet`
//! 2. Create the canonical directory skeleton
//! 3. Write every file, replacing whatever is already there
//! 4. Optionally initialize a repository (failure only warns)
//!
//! A failed directory creation or write aborts immediately. Files written
//! before the failure stay on disk.

use std::path::{Path, PathBuf};
use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{Filesystem, TemplateRenderer, VersionControl},
    domain::{DomainValidator as validator, ProjectConfig, TemplateFileSet, layout},
    error::ModsmithResult,
};

/// What `materialize` did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MaterializeReport {
    pub project_path: PathBuf,
    pub directories_created: Vec<PathBuf>,
    pub files_written: Vec<PathBuf>,
    pub vcs_initialized: bool,
    /// Set when repository initialization was requested but failed.
    pub vcs_warning: Option<String>,
}

/// Preview of a generation run, used by `--dry-run`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldPlan {
    pub project_path: PathBuf,
    pub directories: Vec<PathBuf>,
    pub files: TemplateFileSet,
}

/// Main scaffolding service.
pub struct ScaffoldService {
    renderer: Box<dyn TemplateRenderer>,
    filesystem: Box<dyn Filesystem>,
    vcs: Box<dyn VersionControl>,
}

impl ScaffoldService {
    /// Create a new scaffold service with the given adapters.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use modsmith_core::application::ScaffoldService;
    ///
    /// let service = ScaffoldService::new(
    ///     Box::new(renderer),   // impl TemplateRenderer
    ///     Box::new(filesystem), // impl Filesystem
    ///     Box::new(vcs),        // impl VersionControl
    /// );
    /// ```
    pub fn new(
        renderer: Box<dyn TemplateRenderer>,
        filesystem: Box<dyn Filesystem>,
        vcs: Box<dyn VersionControl>,
    ) -> Self {
        Self {
            renderer,
            filesystem,
            vcs,
        }
    }

    /// Render and materialize in one go, into `config.output_dir()`.
    #[instrument(
        skip_all,
        fields(
            mod_id = %config.mod_id(),
            template = %config.template(),
            output = %config.output_dir().display()
        )
    )]
    pub fn scaffold(&self, config: &ProjectConfig) -> ModsmithResult<MaterializeReport> {
        info!("Scaffolding '{}'", config.mod_name());
        let files = self.render(config)?;
        self.materialize(config.output_dir(), config, &files)
    }

    /// Render the configured template without touching the filesystem.
    pub fn render(&self, config: &ProjectConfig) -> ModsmithResult<TemplateFileSet> {
        validator::validate_config(config)?;
        let files = self.renderer.render_project(config.template(), config)?;
        debug!(files = files.len(), "Template rendered");
        Ok(files)
    }

    /// Everything `scaffold` would create, without creating it.
    pub fn plan(&self, config: &ProjectConfig) -> ModsmithResult<ScaffoldPlan> {
        let files = self.render(config)?;
        let project_path = config.project_path();
        let directories = skeleton_dirs(config)
            .into_iter()
            .map(|d| project_path.join(d))
            .collect();
        Ok(ScaffoldPlan {
            project_path,
            directories,
            files,
        })
    }

    /// Write a rendered file set under `output_dir/<collapsed mod name>`.
    #[instrument(skip_all, fields(output = %output_dir.display(), files = files.len()))]
    pub fn materialize(
        &self,
        output_dir: &Path,
        config: &ProjectConfig,
        files: &TemplateFileSet,
    ) -> ModsmithResult<MaterializeReport> {
        let project_path = output_dir.join(config.project_dir_name());

        // 1. Skeleton
        let mut directories_created = Vec::new();
        self.filesystem.create_dir_all(&project_path)?;
        directories_created.push(project_path.clone());
        for dir in skeleton_dirs(config) {
            let path = project_path.join(dir);
            self.filesystem.create_dir_all(&path)?;
            directories_created.push(path);
        }

        // 2. Files
        let mut files_written = Vec::with_capacity(files.len());
        for (relative, content) in files.iter() {
            let path = project_path.join(relative);
            if let Some(parent) = path.parent() {
                self.filesystem.create_dir_all(parent)?;
            }
            self.filesystem.write_file(&path, content)?;
            debug!(path = %path.display(), "Wrote file");
            files_written.push(path);
        }

        // 3. Repository, best effort
        let (vcs_initialized, vcs_warning) = if config.init_version_control() {
            match self.vcs.init(&project_path) {
                Ok(()) => {
                    info!("Initialized repository");
                    (true, None)
                }
                Err(e) => {
                    warn!(error = %e, "Repository initialization failed");
                    (false, Some(e.to_string()))
                }
            }
        } else {
            (false, None)
        };

        info!(
            files = files_written.len(),
            path = %project_path.display(),
            "Project materialized"
        );

        Ok(MaterializeReport {
            project_path,
            directories_created,
            files_written,
            vcs_initialized,
            vcs_warning,
        })
    }
}

/// Directories created before any file, relative to the project root.
fn skeleton_dirs(config: &ProjectConfig) -> Vec<String> {
    let source = layout::source_dir(config.mod_id());
    let mut dirs = vec![
        source.clone(),
        format!("{source}/items"),
        format!("{}/locale", layout::RESOURCES_ROOT),
        format!("{}/items", layout::RESOURCES_ROOT),
    ];
    if config.include_editor_config() {
        dirs.push(layout::EDITOR_DIR.to_string());
    }
    dirs
}
