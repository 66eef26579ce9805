// SPDX-FileCopyrightText: 2026 Rill Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Rill - resolve and run stream pipelines from registered extensions.
//!
//! This is the binary entry point. It plays the pipeline-configuration role:
//! build a registry, register the built-ins, and resolve configured names.

mod pipeline;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use rill_config::RillConfig;
use rill_core::{ExtensionKind, RillError};
use rill_registry::ExtensionRegistry;

use crate::pipeline::Pipeline;

/// Rill - resolve and run stream pipelines from registered extensions.
#[derive(Parser, Debug)]
#[command(name = "rill", version, about, long_about = None)]
struct Cli {
    /// Read configuration from this file instead of the standard locations.
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List registered extensions by kind.
    List,
    /// Resolve the configured pipeline without running it.
    Check,
    /// Build and run the configured pipeline once.
    Run,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let loaded = match &cli.config {
        Some(path) => rill_config::load_and_validate_path(path),
        None => rill_config::load_and_validate(),
    };
    let config = match loaded {
        Ok(config) => config,
        Err(errors) => {
            rill_config::render_errors(&errors);
            return ExitCode::FAILURE;
        }
    };

    init_tracing(&config.logging.level);

    match execute(cli.command, &config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("rill: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn execute(command: Commands, config: &RillConfig) -> Result<(), RillError> {
    let registry = build_registry(config)?;
    match command {
        Commands::List => {
            print!("{}", render_listing(&registry));
        }
        Commands::Check => {
            Pipeline::build(&registry, &config.pipeline)?;
            println!("pipeline ok");
        }
        Commands::Run => {
            let delivered = Pipeline::build(&registry, &config.pipeline)?.run().await?;
            println!("pipeline delivered {delivered} tuple(s)");
        }
    }
    Ok(())
}

fn build_registry(config: &RillConfig) -> Result<ExtensionRegistry, RillError> {
    let registry = ExtensionRegistry::new();
    if config.registry.builtins {
        rill_builtin::register_builtins(&registry)?;
    }
    Ok(registry)
}

/// One section per kind, each line `  name (mode)`.
fn render_listing(registry: &ExtensionRegistry) -> String {
    let mut out = String::new();
    for kind in ExtensionKind::ALL {
        out.push_str(&format!("{kind}s:\n"));
        let names = registry.names(kind);
        if names.is_empty() {
            out.push_str("  (none)\n");
        }
        for name in names {
            let mode = registry
                .mode(kind, &name)
                .map(|m| m.to_string())
                .unwrap_or_default();
            out.push_str(&format!("  {name} ({mode})\n"));
        }
    }
    out
}

/// Initializes the tracing subscriber with the given log level.
fn init_tracing(log_level: &str) {
    use tracing_subscriber::EnvFilter;

    let level = log_level.to_ascii_lowercase();
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(format!(
            "rill={level},rill_registry={level},rill_builtin={level},warn"
        ))
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();
}
