//! Inject command.
//!
//! Reads secrets, flattens them and appends them to the vars file in the
//! selected tool's syntax.

use tracing::debug;

use crate::cli::{output, Cli};
use crate::core::config::Settings;
use crate::core::dispatch::{self, Dispatched};
use crate::core::normalize::normalize;
use crate::core::source::{JsonSource, Query, SecretSource};
use crate::error::{Error, Result};

/// Run the plugin with settings from the environment and secrets from `--input`.
pub fn execute(cli: &Cli) -> Result<()> {
    let settings = Settings::load()?;
    let source = JsonSource::new(cli.input.clone());

    let dispatched = run(cli, settings, &source)?;
    report(&dispatched);
    Ok(())
}

/// Fetch, normalize and dispatch.
///
/// Nothing is read or written when the plugin is disabled.
pub fn run(cli: &Cli, mut settings: Settings, source: &dyn SecretSource) -> Result<Dispatched> {
    if settings.disabled {
        return Err(Error::Disabled);
    }
    if let Some(path) = &cli.secrets_file {
        settings.secrets_file = path.clone();
    }

    let query = Query {
        application: cli.application.clone(),
        system: cli.system.clone(),
        environment: cli.environment.clone(),
    };

    let secrets = source.fetch(&query)?;
    let vars = normalize(&secrets)?;
    debug!(tool = %cli.tool, variables = vars.len(), "dispatching");

    dispatch::dispatch(&cli.tool, vars, &settings.secrets_file)
}

fn report(dispatched: &Dispatched) {
    let injection = &dispatched.injection;
    if injection.count == 0 {
        output::dimmed("no secrets to be injected");
        return;
    }

    output::success(&format!(
        "{} secret{} injected",
        injection.count,
        if injection.count == 1 { "" } else { "s" }
    ));
    output::kv("tool", dispatched.tool);
    output::kv("file", output::path(&injection.path.display().to_string()));
}
