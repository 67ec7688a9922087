//! Scaffolding configuration
//!
//! Loaded with the following precedence (low to high):
//! 1. Built-in defaults
//! 2. Environment variables (NULLINIT_* prefix)
//! 3. CLI flags (handled by caller)

use crate::error::{Error, Result};
use crate::git::{InitOptions, DEFAULT_VCS_COMMAND};
use camino::Utf8PathBuf;
use std::env;

/// Scaffolding configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaffoldConfig {
    /// Directory new projects are created in; `None` means the current directory
    pub base_dir: Option<Utf8PathBuf>,
    /// Version-control command used for `init`
    pub vcs_command: String,
    /// Whether to initialize a repository at all
    pub init_vcs: bool,
}

impl Default for ScaffoldConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            vcs_command: DEFAULT_VCS_COMMAND.to_string(),
            init_vcs: true,
        }
    }
}

impl ScaffoldConfig {
    /// Defaults with environment variable overrides applied
    pub fn from_env() -> Result<Self> {
        Self::default().apply_env_overrides()
    }

    fn apply_env_overrides(mut self) -> Result<Self> {
        if let Ok(val) = env::var("NULLINIT_VCS_COMMAND") {
            if !val.trim().is_empty() {
                self.vcs_command = val.trim().to_string();
            }
        }

        if let Ok(val) = env::var("NULLINIT_SKIP_VCS") {
            self.init_vcs = !parse_bool(&val).ok_or_else(|| {
                Error::invalid_config("NULLINIT_SKIP_VCS must be one of 1/0, true/false, yes/no, on/off")
            })?;
        }

        if let Ok(val) = env::var("NULLINIT_BASE_DIR") {
            if !val.is_empty() {
                self.base_dir = Some(Utf8PathBuf::from(val));
            }
        }

        Ok(self)
    }

    /// Resolve the base directory, falling back to the current directory
    pub fn resolve_base_dir(&self) -> Result<Utf8PathBuf> {
        if let Some(dir) = &self.base_dir {
            return Ok(dir.clone());
        }

        let cwd = env::current_dir()?;
        Utf8PathBuf::try_from(cwd).map_err(|e| Error::invalid_path(e.into_path_buf().display().to_string()))
    }

    /// Options for the version-control initializer
    pub fn init_options(&self) -> InitOptions {
        InitOptions::with_command(&self.vcs_command)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var("NULLINIT_VCS_COMMAND");
        env::remove_var("NULLINIT_SKIP_VCS");
        env::remove_var("NULLINIT_BASE_DIR");
    }

    #[test]
    #[serial]
    fn test_defaults_without_env() {
        clear_env();
        let config = ScaffoldConfig::from_env().unwrap();
        assert_eq!(config, ScaffoldConfig::default());
        assert_eq!(config.vcs_command, "git");
        assert!(config.init_vcs);
    }

    #[test]
    #[serial]
    fn test_env_overrides() {
        clear_env();
        env::set_var("NULLINIT_VCS_COMMAND", "hg");
        env::set_var("NULLINIT_SKIP_VCS", "yes");
        env::set_var("NULLINIT_BASE_DIR", "/tmp/projects");

        let config = ScaffoldConfig::from_env().unwrap();
        clear_env();

        assert_eq!(config.vcs_command, "hg");
        assert!(!config.init_vcs);
        assert_eq!(config.base_dir, Some(Utf8PathBuf::from("/tmp/projects")));
    }

    #[test]
    #[serial]
    fn test_invalid_skip_value() {
        clear_env();
        env::set_var("NULLINIT_SKIP_VCS", "sometimes");

        let result = ScaffoldConfig::from_env();
        clear_env();

        assert!(matches!(result, Err(Error::InvalidConfig { .. })));
    }

    #[test]
    fn test_parse_bool() {
        assert_eq!(parse_bool("TRUE"), Some(true));
        assert_eq!(parse_bool(" off "), Some(false));
        assert_eq!(parse_bool(""), None);
    }

    #[test]
    fn test_explicit_base_dir_wins() {
        let config = ScaffoldConfig {
            base_dir: Some(Utf8PathBuf::from("/srv")),
            ..Default::default()
        };
        assert_eq!(config.resolve_base_dir().unwrap(), Utf8PathBuf::from("/srv"));
    }
}
