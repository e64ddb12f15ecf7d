//! kubeslice CLI
//!
//! Extracts one context from a merged kubeconfig and prints a minimal,
//! self-contained kubeconfig for it.

mod cli;
mod error;

use std::fs;
use std::io::Write;

use clap::Parser;
use colored::Colorize;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use cli::Cli;
use error::{CliError, Result};

fn main() {
    if let Err(e) = run() {
        eprintln!("{}: {}", "error".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    // Setup tracing if verbose
    if cli.verbose {
        let subscriber = FmtSubscriber::builder()
            .with_max_level(Level::DEBUG)
            .with_target(true)
            .finish();
        tracing::subscriber::set_global_default(subscriber)
            .expect("Failed to set tracing subscriber");
        tracing::debug!("Verbose mode enabled");
    }

    let data = fs::read(&cli.file).map_err(|source| CliError::ReadInput {
        path: cli.file.clone(),
        source,
    })?;
    tracing::debug!(bytes = data.len(), "read kubeconfig");

    let config = kubeslice_config::codec::from_slice(&data)?;
    let scoped = kubeslice_config::scope(&config, &cli.context)?;
    let out = kubeslice_config::codec::to_string(&scoped)?;
    tracing::debug!(bytes = out.len(), "encoded scoped kubeconfig");

    let mut stdout = std::io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    Ok(())
}
