//! runb - inject secrets into CI/CD pipelines.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use runb::cli::output;
use runb::cli::{execute, Cli};
use runb::core::constants;
use runb::error::Error;

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env(constants::LOG_VAR).unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("runb=debug")
        } else {
            EnvFilter::new("runb=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        let suggestion = match &e {
            Error::Disabled => Some(
                "unset SENHASEGURA_DISABLE_RUNB and `disabled` in .runb.toml to enable the plugin",
            ),
            Error::InvalidTool(_) => Some("pass one of the listed values with --tool"),
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(hint);
        }
        std::process::exit(1);
    }
}
