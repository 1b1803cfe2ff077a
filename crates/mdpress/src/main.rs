//! mdpress CLI - Static documentation site generator.
//!
//! Provides commands for:
//! - `check`: Validate and resolve a site configuration
//! - `nav`: Print the bound navigation view for a document path

mod commands;
mod error;
mod output;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use commands::{CheckArgs, NavArgs};
use output::Output;

/// mdpress - Static documentation site generator.
#[derive(Parser)]
#[command(name = "mdpress", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate and resolve the site configuration.
    Check(CheckArgs),
    /// Print the bound navigation view for a document path.
    Nav(NavArgs),
}

fn main() {
    let cli = Cli::parse();
    let output = Output::new();

    // Check if verbose flag is set for the selected command
    let verbose = match &cli.command {
        Commands::Check(args) => args.verbose,
        Commands::Nav(args) => args.verbose,
    };

    // Initialize tracing with appropriate log level
    // --verbose enables INFO level, otherwise use RUST_LOG or default to WARN
    let filter = if verbose {
        EnvFilter::new("info")
    } else {
        EnvFilter::from_default_env()
    };
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let result = match cli.command {
        Commands::Check(args) => args.execute(&output),
        Commands::Nav(args) => args.execute(&output),
    };

    if let Err(err) = result {
        output.error(&format!("Error: {err}"));
        std::process::exit(1);
    }
}
