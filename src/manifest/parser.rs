// src/manifest/parser.rs

//! Cookbook manifest parsing and validation

use crate::error::{Error, Result};
use crate::manifest::format::CookbookManifest;
use std::collections::HashSet;
use std::path::Path;
use tracing::warn;

/// Parse a manifest from a TOML string
///
/// Syntax-level failures only; use [`load_manifest`] to also enforce the
/// manifest invariants.
pub fn parse_manifest(content: &str) -> Result<CookbookManifest> {
    toml::from_str(content).map_err(|e| Error::Parse(format!("Invalid manifest: {}", e)))
}

/// Parse a manifest from a file
pub fn parse_manifest_file(path: &Path) -> Result<CookbookManifest> {
    let content = std::fs::read_to_string(path)?;
    parse_manifest(&content)
}

/// Validate a manifest for completeness and referential integrity
///
/// Hard violations fail with [`Error::MalformedManifest`]: empty name or
/// version, duplicate recipe identifiers, duplicate attribute keys, and
/// attribute scopes referencing recipes the manifest does not declare.
///
/// Returns the list of warnings for fields a complete manifest should carry.
pub fn validate_manifest(manifest: &CookbookManifest) -> Result<Vec<String>> {
    let mut warnings = Vec::new();

    // Check identity fields
    if manifest.name.is_empty() {
        return Err(Error::MalformedManifest(
            "cookbook name cannot be empty".to_string(),
        ));
    }
    if manifest.version.is_empty() {
        return Err(Error::MalformedManifest(
            "cookbook version cannot be empty".to_string(),
        ));
    }

    // Recipe identifiers must be unique or lookup by id is ambiguous
    let mut seen_recipes = HashSet::new();
    for entry in &manifest.recipes {
        if !seen_recipes.insert(&entry.name) {
            return Err(Error::MalformedManifest(format!(
                "duplicate recipe: {}",
                entry.name
            )));
        }
        if entry.description.is_empty() {
            warnings.push(format!("Recipe {} has no description", entry.name));
        }
    }

    let mut seen_keys = HashSet::new();
    for attr in &manifest.attributes {
        if attr.key.is_empty() {
            return Err(Error::MalformedManifest(
                "attribute key cannot be empty".to_string(),
            ));
        }
        if !seen_keys.insert(attr.key.as_str()) {
            return Err(Error::MalformedManifest(format!(
                "duplicate attribute key: {}",
                attr.key
            )));
        }

        // Every scope entry must name a declared recipe
        for id in &attr.recipes {
            if !manifest.has_recipe(id) {
                return Err(Error::MalformedManifest(format!(
                    "attribute {} references undeclared recipe {}",
                    attr.key, id
                )));
            }
        }

        if attr.key.chars().any(|c| c.is_ascii_lowercase()) {
            warnings.push(format!("Attribute key {} is not uppercase", attr.key));
        }
        if attr.recipes.is_empty() {
            warnings.push(format!("Attribute {} is not scoped to any recipe", attr.key));
        }
    }

    // Warn about missing identity fields
    if manifest.maintainer.is_none() {
        warnings.push("Missing cookbook maintainer".to_string());
    }
    if manifest.license.is_none() {
        warnings.push("Missing cookbook license".to_string());
    }
    if manifest.description.is_none() {
        warnings.push("Missing cookbook description".to_string());
    }

    Ok(warnings)
}

/// Load a manifest from a TOML string
///
/// Parses and validates in one step; warnings are logged, hard violations
/// fail the load. This is the entry point hosting engines use.
pub fn load_manifest(content: &str) -> Result<CookbookManifest> {
    let manifest = parse_manifest(content)?;
    for warning in validate_manifest(&manifest)? {
        warn!("{}", warning);
    }
    Ok(manifest)
}

/// Load a manifest from a file
pub fn load_manifest_file(path: &Path) -> Result<CookbookManifest> {
    let manifest = parse_manifest_file(path)?;
    for warning in validate_manifest(&manifest)? {
        warn!("{}: {}", path.display(), warning);
    }
    Ok(manifest)
}
