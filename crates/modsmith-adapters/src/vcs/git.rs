//! Repository initialisation through the `git` executable.

use std::ffi::OsString;
use std::path::Path;
use std::process::Command;

use tracing::{debug, instrument};

use modsmith_core::{
    application::{ApplicationError, ports::VersionControl},
    error::ModsmithResult,
};

/// Runs `git init` in the target directory.
#[derive(Debug, Clone)]
pub struct GitCli {
    program: OsString,
}

impl GitCli {
    pub fn new() -> Self {
        Self::with_program("git")
    }

    /// Use a different executable, e.g. an absolute path to git.
    pub fn with_program(program: impl Into<OsString>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for GitCli {
    fn default() -> Self {
        Self::new()
    }
}

impl VersionControl for GitCli {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn init(&self, path: &Path) -> ModsmithResult<()> {
        let output = Command::new(&self.program)
            .arg("init")
            .current_dir(path)
            .output()
            .map_err(|e| ApplicationError::VersionControlFailed {
                reason: format!("could not run {}: {e}", self.program.to_string_lossy()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(ApplicationError::VersionControlFailed {
                reason: format!("git init exited with {}: {}", output.status, stderr.trim()),
            }
            .into());
        }

        debug!("Initialized repository");
        Ok(())
    }
}
