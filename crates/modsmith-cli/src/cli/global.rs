//! Flags accepted by every subcommand, flattened into [`super::Cli`].

use std::path::PathBuf;

use clap::{ArgAction, Args, builder::FalseyValueParser};

#[derive(Debug, Clone, Args)]
pub struct GlobalArgs {
    /// More log output: -v info, -vv debug, -vvv trace.
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only print errors.
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output.
    ///
    /// Also enabled by a non-empty `NO_COLOR` (https://no-color.org).
    /// `NO_COLOR=0`, `false`, `no` and `off` leave color on.
    #[arg(
        long,
        global = true,
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new(),
        hide_env_values = true
    )]
    pub no_color: bool,

    /// Read configuration from FILE instead of the user config.
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// How results are rendered.
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Auto)]
    pub output_format: OutputFormat,
}

/// Rendering mode for command output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human when stdout is a terminal, plain otherwise.
    #[default]
    Auto,
    /// Colored, with spinners.
    Human,
    /// No colors or spinners.
    Plain,
    /// One JSON document on stdout.
    Json,
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::*;

    #[derive(Parser)]
    struct Harness {
        #[command(flatten)]
        global: GlobalArgs,
    }

    #[test]
    fn no_color_flag_without_env() {
        let h = Harness::try_parse_from(["t", "--no-color"]).unwrap();
        assert!(h.global.no_color);
    }

    #[test]
    fn verbosity_counts() {
        let h = Harness::try_parse_from(["t", "-vvv"]).unwrap();
        assert_eq!(h.global.verbose, 3);
    }

    #[test]
    fn quiet_conflicts_with_verbose() {
        assert!(Harness::try_parse_from(["t", "-q", "-v"]).is_err());
    }
}
