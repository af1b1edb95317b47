//! Flatten secret records into one variable set.

use tracing::debug;

use crate::core::secret::{Fields, Secret};
use crate::core::types::Variables;
use crate::error::Result;

/// Flatten `secrets` into a single name -> value map.
///
/// Records are walked in input order. Within a record the order is cloud
/// credentials, PAM credentials, ephemeral credentials, then the key-value
/// block. A name seen again overwrites the earlier value.
///
/// # Errors
///
/// Returns `Error::TypeMismatch` if any field value is not a string. No
/// partial result is returned.
pub fn normalize(secrets: &[Secret]) -> Result<Variables> {
    let mut vars = Variables::new();

    for secret in secrets {
        for cloud in &secret.cloud_credentials {
            merge(&mut vars, cloud)?;
        }
        for pam in &secret.pam_credentials {
            merge(&mut vars, pam)?;
        }
        for ephemeral in &secret.ephemeral_credentials {
            merge(&mut vars, ephemeral)?;
        }
        merge(&mut vars, &secret.key_values)?;
    }

    debug!(secrets = secrets.len(), variables = vars.len(), "secrets normalized");

    Ok(vars)
}

fn merge<F: Fields>(vars: &mut Variables, record: &F) -> Result<()> {
    vars.extend(record.to_vars()?);
    Ok(())
}
