//! `modsmith config`: inspect configuration values.

use std::path::PathBuf;

use crate::{
    cli::{ConfigCommands, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Dispatch to the correct config subcommand.
pub fn execute(
    cmd: ConfigCommands,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            output.print(&value)?;
        }

        ConfigCommands::List => {
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            output.header("Current configuration:")?;
            output.print(&serialised)?;
            if config.defaults.game_directory.is_none() {
                output.print(&format!(
                    "# game_directory (detected) = \"{}\"",
                    config.game_directory()
                ))?;
            }
        }

        ConfigCommands::Path => {
            output.print(&active_path(global.config).display().to_string())?;
        }
    }

    Ok(())
}

fn active_path(explicit: Option<PathBuf>) -> PathBuf {
    explicit.unwrap_or_else(AppConfig::config_path)
}

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    let d = &config.defaults;
    let value = match key {
        "defaults.author" => d.author.clone(),
        "defaults.description" => d.description.clone(),
        "defaults.game_directory" => config.game_directory(),
        "defaults.game_version" => d.game_version.clone(),
        "defaults.mod_version" => d.mod_version.clone(),
        "defaults.template" => d.template.clone(),
        "defaults.vscode" => d.vscode.to_string(),
        "defaults.git" => d.git.to_string(),
        "defaults.wrapper" => d.wrapper.to_string(),
        "output.no_color" => config.output.no_color.to_string(),
        "output.format" => config.output.format.clone(),
        _ => {
            return Err(CliError::ConfigError {
                message: format!("Unknown config key: '{key}'"),
                source: None,
            });
        }
    };
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_known_keys() {
        let cfg = AppConfig::default();
        assert_eq!(get_config_value(&cfg, "defaults.template").unwrap(), "basic");
        assert_eq!(get_config_value(&cfg, "defaults.git").unwrap(), "true");
        assert_eq!(get_config_value(&cfg, "output.no_color").unwrap(), "false");
    }

    #[test]
    fn unset_game_directory_reports_detected_path() {
        let cfg = AppConfig::default();
        let value = get_config_value(&cfg, "defaults.game_directory").unwrap();
        assert!(value.ends_with("Necesse"));
    }

    #[test]
    fn get_unknown_key_is_error() {
        let cfg = AppConfig::default();
        assert!(matches!(
            get_config_value(&cfg, "does.not.exist"),
            Err(CliError::ConfigError { .. })
        ));
    }

    #[test]
    fn explicit_path_is_active() {
        let p = PathBuf::from("/etc/modsmith.toml");
        assert_eq!(active_path(Some(p.clone())), p);
        assert_eq!(active_path(None), AppConfig::config_path());
    }
}
