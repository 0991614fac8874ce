//! One module per subcommand.

pub mod add;
pub mod completions;
pub mod config;
pub mod init;
pub mod list;
pub mod new;
