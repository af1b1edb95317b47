//! Where secret records come from.
//!
//! The service transport lives outside this crate. A [`SecretSource`] hands
//! over whatever the service returned for a [`Query`]; [`JsonSource`] reads a
//! saved read-data response from a file or stdin.

use std::io::Read;
use std::path::PathBuf;

use tracing::debug;

use crate::core::constants;
use crate::core::secret::{Secret, SecretResponse};
use crate::error::{Result, UpstreamError};

/// Application identity the secrets are requested for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Query {
    pub application: String,
    pub system: String,
    pub environment: String,
}

/// Provider of secret records.
pub trait SecretSource {
    /// Fetch the secrets for `query`.
    ///
    /// # Errors
    ///
    /// Returns `Error::Upstream` if the records cannot be obtained.
    fn fetch(&self, query: &Query) -> Result<Vec<Secret>>;
}

/// Reads a JSON read-data response.
#[derive(Debug, Clone)]
pub struct JsonSource {
    input: Option<PathBuf>,
}

impl JsonSource {
    /// Read from `path`, or from stdin when `path` is `-`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        if path.as_os_str() == constants::STDIN {
            Self::stdin()
        } else {
            Self { input: Some(path) }
        }
    }

    /// Read from stdin.
    pub fn stdin() -> Self {
        Self { input: None }
    }

    fn name(&self) -> String {
        match &self.input {
            Some(path) => path.display().to_string(),
            None => "stdin".to_string(),
        }
    }

    fn read(&self) -> std::io::Result<String> {
        match &self.input {
            Some(path) => std::fs::read_to_string(path),
            None => {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                Ok(buf)
            }
        }
    }
}

impl SecretSource for JsonSource {
    fn fetch(&self, query: &Query) -> Result<Vec<Secret>> {
        let source_name = self.name();
        debug!(
            source = %source_name,
            application = %query.application,
            system = %query.system,
            environment = %query.environment,
            "reading secrets"
        );

        let raw = self.read().map_err(|error| UpstreamError::Read {
            source_name: source_name.clone(),
            error,
        })?;
        let response = parse_response(&raw).map_err(|error| UpstreamError::Parse {
            source_name,
            error,
        })?;

        debug!(secrets = response.secrets.len(), "secrets received");
        Ok(response.secrets)
    }
}

fn parse_response(raw: &str) -> serde_json::Result<SecretResponse> {
    serde_json::from_str(raw)
}
