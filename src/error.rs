//! Error types for runb.

use thiserror::Error;

use crate::core::format::Tool;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    #[error("SENHASEGURA_DISABLE_RUNB is set to true. Plugin is disabled.")]
    Disabled,

    #[error("secret retrieval failed: {0}")]
    Upstream(#[from] UpstreamError),

    #[error("{kind} field '{field}' must be a string, found {found}")]
    TypeMismatch {
        kind: &'static str,
        field: String,
        found: &'static str,
    },

    #[error(
        "Tool '{0}' is invalid, it must be one of the following values: {valid}",
        valid = Tool::valid_list()
    )]
    InvalidTool(String),

    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Failures of the secret source.
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("failed to read {source_name}: {error}")]
    Read {
        source_name: String,
        #[source]
        error: std::io::Error,
    },

    #[error("malformed response from {source_name}: {error}")]
    Parse {
        source_name: String,
        #[source]
        error: serde_json::Error,
    },
}

/// Settings loading failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
