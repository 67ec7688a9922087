//! Error types for nullinit-projects

use thiserror::Error;

/// Result type alias using nullinit-projects's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Scaffolding error types
#[derive(Error, Debug)]
pub enum Error {
    /// Target project directory already exists
    #[error("Project already exists at: {path}")]
    ProjectExists { path: String },

    /// Version-control binary could not be resolved on PATH
    #[error("Version-control command not found: {command}. Please ensure it is installed and in PATH")]
    VcsNotFound { command: String },

    /// Version-control command ran but failed
    #[error("Version-control operation failed: {message}")]
    VcsOperation { message: String },

    /// Repository directory does not exist
    #[error("Repository not found at: {path}")]
    RepoNotFound { path: String },

    /// Invalid configuration value
    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    /// Invalid path
    #[error("Invalid path: {path}")]
    InvalidPath { path: String },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a project exists error
    pub fn project_exists(path: impl Into<String>) -> Self {
        Self::ProjectExists { path: path.into() }
    }

    /// Create a version-control not found error
    pub fn vcs_not_found(command: impl Into<String>) -> Self {
        Self::VcsNotFound {
            command: command.into(),
        }
    }

    /// Create a version-control operation error
    pub fn vcs_operation(message: impl Into<String>) -> Self {
        Self::VcsOperation {
            message: message.into(),
        }
    }

    /// Create a repo not found error
    pub fn repo_not_found(path: impl Into<String>) -> Self {
        Self::RepoNotFound { path: path.into() }
    }

    /// Create an invalid config error
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create an invalid path error
    pub fn invalid_path(path: impl Into<String>) -> Self {
        Self::InvalidPath { path: path.into() }
    }

    /// Whether this error means the target directory was already taken
    pub fn is_project_exists(&self) -> bool {
        matches!(self, Self::ProjectExists { .. })
    }
}
