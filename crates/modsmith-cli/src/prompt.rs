//! Interactive prompts.
//!
//! Backed by `dialoguer` when the `interactive` feature is enabled. Without
//! it every prompt fails with [`CliError::FeatureNotAvailable`], so commands
//! still work when all values come from flags.

use std::fmt::{Debug, Display};
use std::str::FromStr;

use crate::error::{CliError, CliResult};

#[cfg(feature = "interactive")]
mod backend {
    use std::fmt::Debug;
    use std::str::FromStr;

    use dialoguer::{Confirm, Input, Select, theme::ColorfulTheme};

    use modsmith_core::domain::entities::validate_mod_id;

    use crate::error::{CliError, CliResult};

    fn map_err(err: dialoguer::Error) -> CliError {
        match err {
            dialoguer::Error::IO(e) if e.kind() == std::io::ErrorKind::Interrupted => {
                CliError::Cancelled
            }
            dialoguer::Error::IO(e) => CliError::IoError {
                message: "prompt failed".into(),
                source: e,
            },
        }
    }

    pub fn text(prompt: &str, default: &str, allow_empty: bool) -> CliResult<String> {
        let theme = ColorfulTheme::default();
        let mut input = Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);
        if !default.is_empty() {
            input = input.default(default.to_owned());
        }
        if !allow_empty {
            input = input.validate_with(|s: &String| -> Result<(), String> {
                if s.trim().is_empty() {
                    Err("a value is required".into())
                } else {
                    Ok(())
                }
            });
        }
        input.interact_text().map_err(map_err)
    }

    pub fn mod_id(prompt: &str, default: &str) -> CliResult<String> {
        let theme = ColorfulTheme::default();
        Input::<String>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default.to_owned())
            .validate_with(|s: &String| -> Result<(), String> {
                validate_mod_id(s).map_err(|e| e.to_string())
            })
            .interact_text()
            .map_err(map_err)
    }

    pub fn number<T>(prompt: &str, default: T) -> CliResult<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: Debug + ToString,
    {
        let theme = ColorfulTheme::default();
        Input::<T>::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact_text()
            .map_err(map_err)
    }

    pub fn select(prompt: &str, items: &[&str], default: usize) -> CliResult<usize> {
        let theme = ColorfulTheme::default();
        Select::with_theme(&theme)
            .with_prompt(prompt)
            .items(items)
            .default(default)
            .interact()
            .map_err(map_err)
    }

    pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
        let theme = ColorfulTheme::default();
        Confirm::with_theme(&theme)
            .with_prompt(prompt)
            .default(default)
            .interact()
            .map_err(map_err)
    }
}

#[cfg(not(feature = "interactive"))]
mod backend {
    use std::fmt::Debug;
    use std::str::FromStr;

    use crate::error::{CliError, CliResult};

    fn unavailable<T>() -> CliResult<T> {
        Err(CliError::FeatureNotAvailable {
            feature: "interactive",
        })
    }

    pub fn text(_prompt: &str, _default: &str, _allow_empty: bool) -> CliResult<String> {
        unavailable()
    }

    pub fn mod_id(_prompt: &str, _default: &str) -> CliResult<String> {
        unavailable()
    }

    pub fn number<T>(_prompt: &str, _default: T) -> CliResult<T>
    where
        T: Clone + ToString + FromStr,
        <T as FromStr>::Err: Debug + ToString,
    {
        unavailable()
    }

    pub fn select(_prompt: &str, _items: &[&str], _default: usize) -> CliResult<usize> {
        unavailable()
    }

    pub fn confirm(_prompt: &str, _default: bool) -> CliResult<bool> {
        unavailable()
    }
}

/// Free text. An empty `default` means no pre-filled value.
pub fn text(prompt: &str, default: &str) -> CliResult<String> {
    backend::text(prompt, default, true)
}

/// Non-empty free text.
pub fn required_text(prompt: &str, default: &str) -> CliResult<String> {
    backend::text(prompt, default, false)
}

/// Mod id, re-prompting until it is lowercase letters and digits.
pub fn mod_id(prompt: &str, default: &str) -> CliResult<String> {
    backend::mod_id(prompt, default)
}

pub fn number<T>(prompt: &str, default: T) -> CliResult<T>
where
    T: Clone + ToString + FromStr,
    <T as FromStr>::Err: Debug + ToString,
{
    backend::number(prompt, default)
}

pub fn confirm(prompt: &str, default: bool) -> CliResult<bool> {
    backend::confirm(prompt, default)
}

/// Pair each value with its menu label, `"<value> - <description>"` when
/// the description is non-empty.
pub fn options<T: Copy + Display>(
    values: &[T],
    describe: impl Fn(&T) -> &'static str,
) -> Vec<(T, String)> {
    values
        .iter()
        .map(|v| {
            let description = describe(v);
            let label = if description.is_empty() {
                v.to_string()
            } else {
                format!("{v} - {description}")
            };
            (*v, label)
        })
        .collect()
}

/// Pick one of `choices`; the cursor starts on `default`.
pub fn choose<T: Copy + PartialEq>(
    prompt: &str,
    choices: &[(T, String)],
    default: T,
) -> CliResult<T> {
    let items: Vec<&str> = choices.iter().map(|(_, label)| label.as_str()).collect();
    let default_index = choices
        .iter()
        .position(|(value, _)| *value == default)
        .unwrap_or(0);

    let index = backend::select(prompt, &items, default_index)?;
    choices
        .get(index)
        .map(|(value, _)| *value)
        .ok_or(CliError::Cancelled)
}
