// src/commands.rs
//! Command handlers for the larder CLI

use anyhow::{Context, Result};
use clap::CommandFactory;
use clap_complete::Shell;
use larder::{
    load_manifest_file, parse_manifest_file, validate_manifest, AttributeDeclaration,
    CookbookManifest, RecipeId,
};
use std::path::Path;
use tracing::info;

use crate::cli::Cli;

/// Validate a manifest and report warnings
pub fn validate(manifest_path: &Path) -> Result<()> {
    info!("Validating manifest: {}", manifest_path.display());

    let manifest = parse_manifest_file(manifest_path)
        .with_context(|| format!("Failed to parse {}", manifest_path.display()))?;
    let warnings = validate_manifest(&manifest)?;

    if warnings.is_empty() {
        println!("{} {} is valid", manifest.name, manifest.version);
    } else {
        println!(
            "{} {} is valid with {} warning(s):",
            manifest.name,
            manifest.version,
            warnings.len()
        );
        for warning in &warnings {
            println!("  warning: {}", warning);
        }
    }
    Ok(())
}

/// Show a manifest as a summary or as JSON
pub fn show(manifest_path: &Path, json: bool) -> Result<()> {
    let manifest = load_manifest_file(manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&manifest)?);
        return Ok(());
    }

    print_summary(&manifest);
    Ok(())
}

/// List the recipes a cookbook provides
pub fn recipes(manifest_path: &Path) -> Result<()> {
    let manifest = load_manifest_file(manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    for entry in &manifest.recipes {
        println!("{:<32} {}", entry.name.to_string(), entry.description);
    }
    Ok(())
}

/// List attribute declarations, optionally scoped to one recipe
pub fn attributes(manifest_path: &Path, recipe: Option<&str>) -> Result<()> {
    let manifest = load_manifest_file(manifest_path)
        .with_context(|| format!("Failed to load {}", manifest_path.display()))?;

    let selected: Vec<&AttributeDeclaration> = match recipe {
        Some(spec) => {
            let id: RecipeId = spec
                .parse()
                .with_context(|| format!("Invalid recipe identifier: {}", spec))?;
            if !manifest.has_recipe(&id) {
                anyhow::bail!("Cookbook {} has no recipe {}", manifest.name, id);
            }
            manifest.attributes_for_recipe(&id)
        }
        None => manifest.attributes.iter().collect(),
    };

    for attr in selected {
        print_attribute(attr);
    }
    Ok(())
}

/// Generate shell completions on stdout
pub fn completions(shell: Shell) -> Result<()> {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "larder", &mut std::io::stdout());
    Ok(())
}

fn print_summary(manifest: &CookbookManifest) {
    println!("Cookbook:    {}", manifest.name);
    println!("Version:     {}", manifest.version);
    if let Some(maintainer) = &manifest.maintainer {
        println!("Maintainer:  {}", maintainer);
    }
    if let Some(license) = &manifest.license {
        println!("License:     {}", license);
    }
    if let Some(description) = &manifest.description {
        println!("Description: {}", description);
    }

    println!();
    println!("Recipes ({}):", manifest.recipes.len());
    for entry in &manifest.recipes {
        println!("  {:<30} {}", entry.name.to_string(), entry.description);
    }

    println!();
    println!("Attributes ({}):", manifest.attributes.len());
    for attr in &manifest.attributes {
        print_attribute(attr);
    }
}

fn print_attribute(attr: &AttributeDeclaration) {
    match &attr.display_name {
        Some(display_name) => println!("  {} ({})", attr.key, display_name),
        None => println!("  {}", attr.key),
    }
    println!("    required: {}", attr.required);
    println!("    type:     {}", attr.value_type);
    if let Some(default) = &attr.default {
        match attr.env_reference() {
            Some(var) => println!("    default:  from environment {}", var),
            None => println!("    default:  {}", default),
        }
    }
    if !attr.recipes.is_empty() {
        let scoped: Vec<String> = attr.recipes.iter().map(|r| r.to_string()).collect();
        println!("    recipes:  {}", scoped.join(", "));
    }
}
