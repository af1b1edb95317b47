//! Core library components.
//!
//! Turns secret records from the secret service into pipeline variables and
//! writes them in the syntax of the selected CI/CD tool.

pub mod config;
pub mod constants;
pub mod dispatch;
pub mod format;
pub mod inject;
pub mod normalize;
pub mod secret;
pub mod source;
pub mod types;
