//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables prefixed `MODSMITH_`, with `__` between
//!    sections, e.g. `MODSMITH_DEFAULTS__AUTHOR`
//! 3. Config file (`--config`, else the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

use modsmith_core::domain::entities::{
    DEFAULT_AUTHOR, DEFAULT_DESCRIPTION, DEFAULT_GAME_VERSION, DEFAULT_MOD_VERSION,
};

/// File name used for local configuration and inside the config directory.
pub const CONFIG_FILE_NAME: &str = "modsmith.toml";

const ENV_PREFIX: &str = "MODSMITH";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default values for new projects.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub author: String,
    pub description: String,
    /// `None` means "detect from the platform" at use time.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub game_directory: Option<String>,
    pub game_version: String,
    pub mod_version: String,
    pub template: String,
    pub vscode: bool,
    pub git: bool,
    pub wrapper: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            author: DEFAULT_AUTHOR.into(),
            description: DEFAULT_DESCRIPTION.into(),
            game_directory: None,
            game_version: DEFAULT_GAME_VERSION.into(),
            mod_version: DEFAULT_MOD_VERSION.into(),
            template: "basic".into(),
            vscode: true,
            git: true,
            wrapper: true,
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "human".into(),
        }
    }
}

impl AppConfig {
    /// Load configuration, layering file and environment over the defaults.
    ///
    /// An explicit `config_file` must exist; the default location is
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let (path, required) = match config_file {
            Some(path) => (path.clone(), true),
            None => (Self::config_path(), false),
        };
        Self::load_from(&path, required)
    }

    fn load_from(path: &Path, required: bool) -> anyhow::Result<Self> {
        let defaults = Config::try_from(&Self::default())
            .context("Failed to serialise built-in defaults")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path).format(FileFormat::Toml).required(required))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration values")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `modsmith.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "modsmith", "modsmith")
            .map(|d| d.config_dir().join(CONFIG_FILE_NAME))
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILE_NAME))
    }

    /// Configured game directory, or the platform's usual Steam location.
    pub fn game_directory(&self) -> String {
        self.defaults
            .game_directory
            .clone()
            .unwrap_or_else(default_game_directory)
    }
}

/// Usual Steam install location of Necesse on this platform.
pub fn default_game_directory() -> String {
    if cfg!(windows) {
        return r"C:\Program Files (x86)\Steam\steamapps\common\Necesse".into();
    }
    let home = directories::BaseDirs::new()
        .map(|d| d.home_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("~"));
    let steam = if cfg!(target_os = "macos") {
        home.join("Library/Application Support/Steam")
    } else {
        home.join(".steam/steam")
    };
    steam
        .join("steamapps/common/Necesse")
        .to_string_lossy()
        .into_owned()
}
