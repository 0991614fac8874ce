//! `modsmith init`: create a default configuration file.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::{
    cli::InitArgs,
    config::{AppConfig, CONFIG_FILE_NAME},
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Create a default Modsmith configuration file.
pub fn execute(args: InitArgs, output: OutputManager) -> CliResult<()> {
    let config_path = if args.local {
        PathBuf::from(CONFIG_FILE_NAME)
    } else {
        AppConfig::config_path()
    };

    if config_path.exists() && !args.force {
        output.warning(&format!(
            "Config already exists at {} (use --force to overwrite)",
            config_path.display(),
        ))?;
        return Ok(());
    }

    write_default(&config_path)?;
    info!(path = %config_path.display(), "Configuration written");

    output.success(&format!(
        "Configuration created at {}",
        config_path.display()
    ))?;
    if args.local {
        output.info(&format!(
            "Use it with: modsmith --config {CONFIG_FILE_NAME} <command>"
        ))?;
    }
    Ok(())
}

fn write_default(path: &Path) -> CliResult<()> {
    let toml = toml::to_string_pretty(&AppConfig::default()).map_err(|e| {
        CliError::ConfigError {
            message: format!("Failed to serialise default config: {e}"),
            source: Some(Box::new(e)),
        }
    })?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).with_cli_context(|| {
            format!("Failed to create config directory '{}'", parent.display())
        })?;
    }

    std::fs::write(path, toml)
        .with_cli_context(|| format!("Failed to write config to '{}'", path.display()))
}
