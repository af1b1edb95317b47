//! Constants used throughout runb.
//!
//! Centralizes file names and configuration variable names.

/// Default output file the pipeline sources after injection (.runb.vars).
pub const SECRETS_FILE: &str = ".runb.vars";

/// Optional settings file in the working directory (.runb.toml).
pub const CONFIG_FILE: &str = ".runb.toml";

/// Environment variable that disables the plugin entirely.
pub const DISABLE_VAR: &str = "SENHASEGURA_DISABLE_RUNB";

/// Environment variable overriding the output file path.
pub const SECRETS_FILE_VAR: &str = "SENHASEGURA_SECRETS_FILE";

/// Environment variable holding the tracing filter.
pub const LOG_VAR: &str = "RUNB_LOG";

/// Argument value meaning "read the secret response from stdin".
pub const STDIN: &str = "-";

/// Permissions for a newly created output file.
#[cfg(unix)]
pub const SECRETS_FILE_MODE: u32 = 0o660;
