//! Command-line interface.

pub mod inject;
pub mod output;

use clap::Parser;
use std::path::PathBuf;

/// Running Belt plugin to insert environment variables in most CI/CD pipelines.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "runb",
    about = "Running Belt plugin to insert environment variables in most CI/CD pipelines",
    version
)]
pub struct Cli {
    /// Verbose mode
    #[arg(short, long)]
    pub verbose: bool,

    /// Application name
    #[arg(short, long)]
    pub application: String,

    /// Application system
    #[arg(short, long)]
    pub system: String,

    /// Application environment
    #[arg(short, long)]
    pub environment: String,

    /// Tool name [github, azure-devops, bamboo, bitbucket, circleci, teamcity, linux]
    #[arg(short, long, default_value = "linux")]
    pub tool: String,

    /// Secret service response to read (JSON), `-` for stdin
    #[arg(short, long, default_value = "-")]
    pub input: PathBuf,

    /// Output file (overrides SENHASEGURA_SECRETS_FILE)
    #[arg(long)]
    pub secrets_file: Option<PathBuf>,
}

/// Execute the parsed command line.
pub fn execute(cli: Cli) -> crate::error::Result<()> {
    inject::execute(&cli)
}
