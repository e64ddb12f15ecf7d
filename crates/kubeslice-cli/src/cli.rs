//! CLI argument parsing using clap derive

use std::path::PathBuf;

use clap::Parser;

/// kubeslice - Extract a single context from a merged kubeconfig
///
/// Reads a kubeconfig file, keeps only the named context with its
/// cluster and user, flattens file-backed credentials into inline
/// base64 data, and prints the resulting self-contained kubeconfig
/// to standard output.
#[derive(Parser, Debug)]
#[command(name = "kubeslice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to the kubeconfig file to extract from
    pub file: PathBuf,

    /// Name of the context to extract
    pub context: String,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
