//! Type aliases for domain concepts.

use std::collections::BTreeMap;

/// A pipeline variable name (e.g., DATABASE_URL).
pub type VarName = String;

/// A pipeline variable value.
pub type VarValue = String;

/// Flat set of variables produced from secret records.
///
/// Names are unique. Iteration order is sorted by name, which callers
/// must not treat as meaningful.
pub type Variables = BTreeMap<VarName, VarValue>;
