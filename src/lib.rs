//! runb - Running Belt plugin for CI/CD pipelines.
//!
//! Reads secrets from a secret-management service and writes them as
//! environment variable assignments in the syntax a pipeline runner expects.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── mod           # Argument surface
//! │   ├── inject        # The injection command
//! │   └── output        # Terminal output helpers
//! └── core/             # Core library components
//!     ├── config        # .runb.toml + environment settings
//!     ├── constants     # File names and variable names
//!     ├── secret        # Secret records from the service
//!     ├── source        # Where secret records come from
//!     ├── normalize     # Secret records -> flat variables
//!     ├── format        # Per-tool output syntax
//!     ├── inject        # Append rendered lines to the vars file
//!     └── dispatch      # Tool lookup + injection
//! ```
//!
//! # Supported tools
//!
//! `github`, `azure-devops`, `bamboo`, `bitbucket`, `circleci`, `teamcity`, `linux`.

pub mod cli;
pub mod core;
pub mod error;
