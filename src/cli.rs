// src/cli.rs
//! CLI definitions for the larder manifest inspector
//!
//! This module contains all command-line interface definitions using clap.
//! The actual command implementations are in the `commands` module.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "larder")]
#[command(author = "Larder Contributors")]
#[command(version)]
#[command(about = "Inspect and validate cookbook metadata manifests", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Validate a cookbook manifest
    Validate {
        /// Path to the manifest file
        manifest: PathBuf,
    },

    /// Show a cookbook manifest
    Show {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Emit the manifest as JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// List the recipes a cookbook provides
    Recipes {
        /// Path to the manifest file
        manifest: PathBuf,
    },

    /// List the attributes a cookbook declares
    Attributes {
        /// Path to the manifest file
        manifest: PathBuf,

        /// Only show attributes scoped to this recipe (format: cookbook::recipe)
        #[arg(long)]
        recipe: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}
