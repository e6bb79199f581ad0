//! ecospec - descriptor validator and inspector
//!
//! Loads an ecosystem file, validates the app list, and reports what the
//! supervisor would run. With --json the resolved list is written to
//! stdout for downstream tooling to ingest.

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing::info;

use ecospec::{load_config, load_from_path, Ecosystem};

fn init_tracing(level: &str) -> Result<()> {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();

    Ok(())
}

#[derive(Parser, Debug)]
#[command(name = "ecospec")]
#[command(about = "Validate and inspect process supervision descriptors")]
#[command(
    long_about = "Loads an ecosystem file, checks its structural invariants
(unique non-empty names, launch commands, instance counts), and reports the
resolved app list. Any malformed or invalid descriptor is fatal.

Without --config the standard search locations are used, starting with the
ECOSPEC_CONFIG environment variable."
)]
struct Args {
    /// Path to the ecosystem file (bypasses the standard search locations)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Emit the resolved app list as JSON on stdout
    #[arg(long)]
    json: bool,
}

fn summarize(ecosystem: &Ecosystem) {
    for app in &ecosystem.apps {
        info!(
            name = %app.name,
            command = %app.command_line(),
            instances = app.instances,
            autorestart = app.autorestart,
            "app validated"
        );
        if let Some(threshold) = app.max_memory_restart {
            info!(name = %app.name, "forced restart above {}", threshold);
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level)?;

    let ecosystem = match &args.config {
        Some(path) => load_from_path(path)?,
        None => load_config()?,
    };

    info!("loaded {} app(s)", ecosystem.apps.len());
    summarize(&ecosystem);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&ecosystem.apps)?);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn args_parse_defaults() {
        let args = Args::try_parse_from(["ecospec"]).unwrap();
        assert!(args.config.is_none());
        assert_eq!(args.log_level, "info");
        assert!(!args.json);
    }

    #[test]
    fn args_parse_explicit_config() {
        let args =
            Args::try_parse_from(["ecospec", "--config", "/tmp/ecosystem.toml", "--json"]).unwrap();
        assert_eq!(args.config.as_deref(), Some(std::path::Path::new("/tmp/ecosystem.toml")));
        assert!(args.json);
    }
}
