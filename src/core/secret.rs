//! Secret records as returned by the secret service.
//!
//! Every sub-record is a loosely typed JSON object on the wire. Each kind
//! gets its own type and converts to [`Variables`] through [`Fields::to_vars`],
//! which refuses anything that is not a string instead of coercing it.

use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

use crate::core::types::Variables;
use crate::error::{Error, Result};

/// Response envelope of the service's read-data call.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SecretResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub secrets: Vec<Secret>,
}

/// One secret record.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Secret {
    #[serde(default, deserialize_with = "null_as_default")]
    pub cloud_credentials: Vec<CloudCredential>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub pam_credentials: Vec<PamCredential>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub ephemeral_credentials: Vec<EphemeralCredential>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub key_values: KeyValues,
}

/// Cloud provider credential (access key pairs and the like).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CloudCredential(pub Map<String, Value>);

/// Privileged-access credential.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PamCredential(pub Map<String, Value>);

/// Short-lived credential issued for this run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EphemeralCredential(pub Map<String, Value>);

/// Plain key/value block of a secret.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeyValues(pub Map<String, Value>);

/// Conversion of a sub-record into variables.
pub trait Fields {
    /// Sub-record kind, used in error messages.
    const KIND: &'static str;

    /// Raw fields of the sub-record.
    fn fields(&self) -> &Map<String, Value>;

    /// Convert every field into a variable.
    ///
    /// # Errors
    ///
    /// Returns `Error::TypeMismatch` for the first field whose value is not a
    /// JSON string.
    fn to_vars(&self) -> Result<Variables> {
        self.fields()
            .iter()
            .map(|(name, value)| match value {
                Value::String(s) => Ok((name.clone(), s.clone())),
                other => Err(Error::TypeMismatch {
                    kind: Self::KIND,
                    field: name.clone(),
                    found: json_type(other),
                }),
            })
            .collect()
    }
}

impl Fields for CloudCredential {
    const KIND: &'static str = "cloud credential";

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Fields for PamCredential {
    const KIND: &'static str = "pam credential";

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Fields for EphemeralCredential {
    const KIND: &'static str = "ephemeral credential";

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

impl Fields for KeyValues {
    const KIND: &'static str = "key-value";

    fn fields(&self) -> &Map<String, Value> {
        &self.0
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}
