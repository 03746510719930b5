use std::{env, process};

use anyhow::{Context, Result};
use resources::config::{ConfigResolver, EnvSource};

mod app;
mod cli;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt::init();

    if let Err(e) = run().await {
        eprintln!("Error: {:?}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let matches = cli::command().get_matches_from(cli::normalize_args(env::args_os()));
    let flags = cli::flags(&matches);

    let config = ConfigResolver::new(flags, process_env())
        .resolve()
        .with_context(|| "Failed to resolve dashboard configuration".to_string())?;

    app::Dashboard::from_config(config).serve().await
}

/// Snapshot of the process environment, skipping non UTF-8 entries.
fn process_env() -> EnvSource {
    env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)))
        .collect()
}
