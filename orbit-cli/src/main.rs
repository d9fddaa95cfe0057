//! Orbit registry CLI
//!
//! Terminal-first interface for inspecting the chain network registry
//! and managing user-added custom chains.

mod commands;
mod config;
mod output;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "orbit")]
#[command(version = "0.1.0")]
#[command(about = "Chain network registry - hierarchy, classification, custom chains", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the chains in the built-in catalog
    Chains,

    /// Classify a chain ID
    Classify(commands::classify::ClassifyArgs),

    /// Resolve the base (root) chain for a chain ID
    Base(commands::hierarchy::BaseArgs),

    /// List the valid bridging destinations for a chain ID
    Destinations(commands::hierarchy::DestinationsArgs),

    /// Manage user-added custom chains
    Custom(commands::custom::CustomArgs),
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Chains => commands::chains::run(),
        Commands::Classify(args) => commands::classify::run(args),
        Commands::Base(args) => commands::hierarchy::run_base(args),
        Commands::Destinations(args) => commands::hierarchy::run_destinations(args),
        Commands::Custom(args) => commands::custom::run(args),
    };

    std::process::exit(exit_code);
}
