// src/main.rs

mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Commands};

fn main() -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { manifest } => commands::validate(&manifest),
        Commands::Show { manifest, json } => commands::show(&manifest, json),
        Commands::Recipes { manifest } => commands::recipes(&manifest),
        Commands::Attributes { manifest, recipe } => {
            commands::attributes(&manifest, recipe.as_deref())
        }
        Commands::Completions { shell } => commands::completions(shell),
    }
}
