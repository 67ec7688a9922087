//! Repository initialization operations

use crate::error::{Error, Result};
use camino::Utf8Path;
use std::process::Command;
use tracing::{debug, info};

/// Default version-control command
pub const DEFAULT_VCS_COMMAND: &str = "git";

/// Options for initializing a repository
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InitOptions {
    /// Version-control binary, resolved on PATH
    pub command: String,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            command: DEFAULT_VCS_COMMAND.to_string(),
        }
    }
}

impl InitOptions {
    pub fn with_command(command: impl Into<String>) -> Self {
        Self {
            command: command.into(),
        }
    }
}

/// Initialize a new repository rooted at `path`
///
/// Runs `<command> init` with `path` as the working directory. Output is
/// captured; stderr is folded into the error on failure.
///
/// # Errors
/// Returns error if:
/// - Directory doesn't exist
/// - The command is not on PATH
/// - The command exits non-zero
pub fn init_repository(path: &Utf8Path, options: &InitOptions) -> Result<()> {
    info!("Initializing repository at: {}", path);

    if !path.is_dir() {
        return Err(Error::repo_not_found(path.as_str()));
    }

    let program = which::which(&options.command)
        .map_err(|_| Error::vcs_not_found(&options.command))?;

    debug!("Running: {} init", program.display());
    let output = Command::new(&program)
        .current_dir(path)
        .arg("init")
        .output()?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::vcs_operation(format!(
            "{} init failed ({}): {}",
            options.command,
            output.status,
            stderr.trim()
        )));
    }

    info!("Repository initialized successfully");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use tempfile::TempDir;

    fn temp_path(temp_dir: &TempDir) -> Utf8PathBuf {
        Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap()
    }

    #[test]
    fn test_init_repository() {
        if which::which(DEFAULT_VCS_COMMAND).is_err() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir);

        init_repository(&path, &InitOptions::default()).unwrap();
        assert!(path.join(".git").exists());
    }

    #[test]
    fn test_missing_command() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir);

        let options = InitOptions::with_command("nullinit-no-such-vcs");
        let err = init_repository(&path, &options).unwrap_err();
        assert!(matches!(err, Error::VcsNotFound { ref command } if command == "nullinit-no-such-vcs"));
        assert!(!path.join(".git").exists());
    }

    #[test]
    fn test_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir).join("absent");

        let err = init_repository(&path, &InitOptions::default()).unwrap_err();
        assert!(matches!(err, Error::RepoNotFound { .. }));
    }

    #[cfg(unix)]
    #[test]
    fn test_non_zero_exit() {
        // `false` ignores its arguments and always exits 1
        if which::which("false").is_err() {
            return;
        }
        let temp_dir = TempDir::new().unwrap();
        let path = temp_path(&temp_dir);

        let err = init_repository(&path, &InitOptions::with_command("false")).unwrap_err();
        assert!(matches!(err, Error::VcsOperation { .. }));
    }
}
