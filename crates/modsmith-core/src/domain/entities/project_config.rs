//! The `ProjectConfig` aggregate and its builder.
//!
//! A `ProjectConfig` is the complete, validated set of answers needed to
//! generate a new mod. It is built once per invocation and never mutated
//! afterwards; templates and the materializer only borrow it.
//!
//! Defaults for optional fields are applied here so that every template
//! interpolation point has a value. Environment-dependent defaults (the game
//! install directory) are computed by the caller and passed in.

use std::path::{Path, PathBuf};

use crate::domain::{error::DomainError, naming, value_objects::TemplateKind};

pub const DEFAULT_GAME_VERSION: &str = "1.0.1";
pub const DEFAULT_MOD_VERSION: &str = "1.0.0";
pub const DEFAULT_AUTHOR: &str = "Unknown";
pub const DEFAULT_DESCRIPTION: &str = "A Necesse mod";

/// Everything needed to render and materialize a new mod project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectConfig {
    mod_name: String,
    mod_id: String,
    author: String,
    description: String,
    game_directory: String,
    game_version: String,
    mod_version: String,
    clientside: bool,
    template: TemplateKind,
    output_dir: PathBuf,
    include_editor_config: bool,
    init_version_control: bool,
    include_wrapper: bool,
}

impl ProjectConfig {
    /// Start building a config for the given display name.
    pub fn builder(mod_name: impl Into<String>) -> ProjectConfigBuilder {
        ProjectConfigBuilder::new(mod_name)
    }

    pub fn mod_name(&self) -> &str {
        &self.mod_name
    }
    pub fn mod_id(&self) -> &str {
        &self.mod_id
    }
    pub fn author(&self) -> &str {
        &self.author
    }
    pub fn description(&self) -> &str {
        &self.description
    }
    pub fn game_directory(&self) -> &str {
        &self.game_directory
    }
    pub fn game_version(&self) -> &str {
        &self.game_version
    }
    pub fn mod_version(&self) -> &str {
        &self.mod_version
    }
    pub const fn clientside(&self) -> bool {
        self.clientside
    }
    pub const fn template(&self) -> TemplateKind {
        self.template
    }
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
    pub const fn include_editor_config(&self) -> bool {
        self.include_editor_config
    }
    pub const fn init_version_control(&self) -> bool {
        self.init_version_control
    }
    pub const fn include_wrapper(&self) -> bool {
        self.include_wrapper
    }

    /// Game directory with backslashes normalised to forward slashes, as
    /// embedded in Gradle and editor files.
    pub fn game_directory_normalized(&self) -> String {
        self.game_directory.replace('\\', "/")
    }

    /// Name with whitespace collapsed; used for the project directory and
    /// the Gradle root project name.
    pub fn project_dir_name(&self) -> String {
        naming::collapse_whitespace(&self.mod_name)
    }

    /// `<output_dir>/<project_dir_name>`.
    pub fn project_path(&self) -> PathBuf {
        self.output_dir.join(self.project_dir_name())
    }

    /// Entry class name, e.g. `MymodMod`.
    pub fn main_class_name(&self) -> String {
        naming::main_class_name(&self.mod_id)
    }

    /// Re-check the invariants. Called by the builder.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.mod_name.trim().is_empty() {
            return Err(DomainError::EmptyModName);
        }
        let dir_name = self.project_dir_name();
        if dir_name.contains(['/', '\\']) || dir_name == "." || dir_name == ".." {
            return Err(DomainError::InvalidOption {
                field: "name",
                reason: format!(
                    "'{}' cannot be used as a project directory name",
                    self.mod_name
                ),
            });
        }
        validate_mod_id(&self.mod_id)
    }
}

/// A mod id is non-empty lowercase ASCII alphanumerics.
pub fn validate_mod_id(id: &str) -> Result<(), DomainError> {
    let ok = !id.is_empty()
        && id
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit());
    if ok {
        Ok(())
    } else {
        Err(DomainError::InvalidModId { id: id.to_string() })
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Builder for [`ProjectConfig`].
///
/// Only the display name is required. The mod id defaults to the
/// lowercased, whitespace-stripped name.
#[derive(Debug, Clone)]
pub struct ProjectConfigBuilder {
    mod_name: String,
    mod_id: Option<String>,
    author: Option<String>,
    description: Option<String>,
    game_directory: Option<String>,
    game_version: Option<String>,
    mod_version: Option<String>,
    clientside: bool,
    template: TemplateKind,
    output_dir: PathBuf,
    include_editor_config: bool,
    init_version_control: bool,
    include_wrapper: bool,
}

impl ProjectConfigBuilder {
    pub fn new(mod_name: impl Into<String>) -> Self {
        Self {
            mod_name: mod_name.into(),
            mod_id: None,
            author: None,
            description: None,
            game_directory: None,
            game_version: None,
            mod_version: None,
            clientside: false,
            template: TemplateKind::default(),
            output_dir: PathBuf::from("."),
            include_editor_config: true,
            init_version_control: true,
            include_wrapper: true,
        }
    }

    pub fn mod_id(mut self, id: impl Into<String>) -> Self {
        self.mod_id = Some(id.into());
        self
    }

    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn game_directory(mut self, dir: impl Into<String>) -> Self {
        self.game_directory = Some(dir.into());
        self
    }

    pub fn game_version(mut self, version: impl Into<String>) -> Self {
        self.game_version = Some(version.into());
        self
    }

    pub fn mod_version(mut self, version: impl Into<String>) -> Self {
        self.mod_version = Some(version.into());
        self
    }

    pub fn clientside(mut self, clientside: bool) -> Self {
        self.clientside = clientside;
        self
    }

    pub fn template(mut self, template: TemplateKind) -> Self {
        self.template = template;
        self
    }

    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    pub fn include_editor_config(mut self, yes: bool) -> Self {
        self.include_editor_config = yes;
        self
    }

    pub fn init_version_control(mut self, yes: bool) -> Self {
        self.init_version_control = yes;
        self
    }

    pub fn include_wrapper(mut self, yes: bool) -> Self {
        self.include_wrapper = yes;
        self
    }

    pub fn build(self) -> Result<ProjectConfig, DomainError> {
        let mod_name = self.mod_name.trim().to_string();
        let mod_id = self
            .mod_id
            .unwrap_or_else(|| naming::default_mod_id(&mod_name));

        let config = ProjectConfig {
            mod_name,
            mod_id,
            author: non_blank(self.author, DEFAULT_AUTHOR),
            description: non_blank(self.description, DEFAULT_DESCRIPTION),
            game_directory: self.game_directory.unwrap_or_default(),
            game_version: non_blank(self.game_version, DEFAULT_GAME_VERSION),
            mod_version: non_blank(self.mod_version, DEFAULT_MOD_VERSION),
            clientside: self.clientside,
            template: self.template,
            output_dir: self.output_dir,
            include_editor_config: self.include_editor_config,
            init_version_control: self.init_version_control,
            include_wrapper: self.include_wrapper,
        };
        config.validate()?;
        Ok(config)
    }
}

fn non_blank(value: Option<String>, fallback: &str) -> String {
    match value {
        Some(v) if !v.trim().is_empty() => v,
        _ => fallback.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_derives_mod_id_from_name() {
        let cfg = ProjectConfig::builder("My Mod").build().unwrap();
        assert_eq!(cfg.mod_id(), "mymod");
        assert_eq!(cfg.project_dir_name(), "MyMod");
        assert_eq!(cfg.main_class_name(), "MymodMod");
    }

    #[test]
    fn builder_applies_defaults() {
        let cfg = ProjectConfig::builder("My Mod").build().unwrap();
        assert_eq!(cfg.game_version(), DEFAULT_GAME_VERSION);
        assert_eq!(cfg.mod_version(), DEFAULT_MOD_VERSION);
        assert_eq!(cfg.author(), DEFAULT_AUTHOR);
        assert_eq!(cfg.template(), TemplateKind::Basic);
        assert!(cfg.include_editor_config());
        assert!(cfg.init_version_control());
        assert!(cfg.include_wrapper());
        assert!(!cfg.clientside());
    }

    #[test]
    fn blank_author_falls_back_to_default() {
        let cfg = ProjectConfig::builder("My Mod")
            .author("   ")
            .build()
            .unwrap();
        assert_eq!(cfg.author(), DEFAULT_AUTHOR);
    }

    #[test]
    fn rejects_empty_name() {
        let err = ProjectConfig::builder("   ").mod_id("x").build().unwrap_err();
        assert_eq!(err, DomainError::EmptyModName);
    }

    #[test]
    fn rejects_non_alphanumeric_id() {
        for bad in ["My Mod", "my-mod", "my_mod", "MyMod", ""] {
            let result = ProjectConfig::builder("Name").mod_id(bad).build();
            assert!(
                matches!(result, Err(DomainError::InvalidModId { .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn rejects_name_that_is_not_a_single_directory() {
        for bad in ["../Escape", "a/b", r"a\b", "..", " . "] {
            let result = ProjectConfig::builder(bad).mod_id("ok").build();
            assert!(
                matches!(result, Err(DomainError::InvalidOption { field: "name", .. })),
                "{bad:?} should be rejected"
            );
        }
    }

    #[test]
    fn dotted_name_is_allowed() {
        let cfg = ProjectConfig::builder("Mod v1.2").mod_id("mod").build().unwrap();
        assert_eq!(cfg.project_dir_name(), "Modv1.2");
    }

    #[test]
    fn derived_id_with_punctuation_is_rejected() {
        let result = ProjectConfig::builder("Bob's Mod").build();
        assert!(matches!(result, Err(DomainError::InvalidModId { .. })));
    }

    #[test]
    fn game_directory_backslashes_normalized() {
        let cfg = ProjectConfig::builder("My Mod")
            .game_directory(r"C:\Games\Necesse")
            .build()
            .unwrap();
        assert_eq!(cfg.game_directory_normalized(), "C:/Games/Necesse");
    }

    #[test]
    fn project_path_joins_output_and_dir_name() {
        let cfg = ProjectConfig::builder("Cool  Stuff")
            .mod_id("coolstuff")
            .output_dir("/tmp/out")
            .build()
            .unwrap();
        assert_eq!(cfg.project_path(), PathBuf::from("/tmp/out/CoolStuff"));
    }
}
