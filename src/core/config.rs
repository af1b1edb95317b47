//! Plugin settings.
//!
//! Settings come from three layers, later ones winning: built-in defaults,
//! an optional `.runb.toml` in the working directory, and environment
//! variables.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::core::constants;
use crate::error::{ConfigError, Result};

/// Resolved settings for one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Skip everything and report [`crate::error::Error::Disabled`].
    pub disabled: bool,
    /// File the injector appends to.
    pub secrets_file: PathBuf,
}

/// Shape of `.runb.toml`.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct FileSettings {
    #[serde(default)]
    disabled: Option<bool>,
    #[serde(default)]
    secrets_file: Option<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            disabled: false,
            secrets_file: PathBuf::from(constants::SECRETS_FILE),
        }
    }
}

impl Settings {
    /// Load settings from the current directory and process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `.runb.toml` exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_in(Path::new("."), |key| std::env::var(key).ok())
    }

    /// Load settings from `dir`, reading variables through `lookup`.
    pub fn load_in<F>(dir: &Path, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut settings = Self::default();

        // An enabled switch in the environment wins before the file is read.
        let disable_env = lookup(constants::DISABLE_VAR).map(|raw| parse_bool(&raw));

        let path = dir.join(constants::CONFIG_FILE);
        if disable_env == Some(true) {
            debug!("disabled by environment, skipping config file");
        } else if path.exists() {
            debug!(path = %path.display(), "loading config");
            let contents = std::fs::read_to_string(&path).map_err(ConfigError::ReadFile)?;
            let file: FileSettings = toml::from_str(&contents).map_err(ConfigError::Parse)?;

            if let Some(disabled) = file.disabled {
                settings.disabled = disabled;
            }
            if let Some(secrets_file) = file.secrets_file.filter(|s| !s.is_empty()) {
                settings.secrets_file = PathBuf::from(secrets_file);
            }
        }

        if let Some(disabled) = disable_env {
            settings.disabled = disabled;
        }
        if let Some(secrets_file) = lookup(constants::SECRETS_FILE_VAR).filter(|s| !s.is_empty()) {
            settings.secrets_file = PathBuf::from(secrets_file);
        }

        debug!(
            disabled = settings.disabled,
            secrets_file = %settings.secrets_file.display(),
            "settings resolved"
        );

        Ok(settings)
    }
}

/// Parse a boolean the permissive way CI variables are usually written.
///
/// Unrecognized values count as false.
pub fn parse_bool(raw: &str) -> bool {
    matches!(raw.trim(), "1" | "t" | "T" | "true" | "TRUE" | "True")
}
