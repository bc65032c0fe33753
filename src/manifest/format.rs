// src/manifest/format.rs

//! Cookbook manifest format definitions
//!
//! Manifests are TOML files that describe a cookbook's identity, recipes,
//! and attribute declarations. All records are plain data: lookups and
//! derived views never mutate the manifest.

use crate::error::{Error, Result};
use crate::ident::RecipeId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// A complete cookbook manifest
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CookbookManifest {
    /// Cookbook name, unique within the hosting registry
    #[serde(default)]
    pub name: String,

    /// Maintainer contact (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maintainer: Option<String>,

    /// License statement (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub license: Option<String>,

    /// Human-readable description (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Cookbook version, dotted numeric by convention (e.g. "10.0.1")
    ///
    /// Stored verbatim; no semver parsing is applied.
    #[serde(default)]
    pub version: String,

    /// Recipes the cookbook provides, in declaration order
    #[serde(default)]
    pub recipes: Vec<RecipeEntry>,

    /// Attribute declarations, in declaration order
    #[serde(default)]
    pub attributes: Vec<AttributeDeclaration>,
}

/// A recipe the cookbook provides
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RecipeEntry {
    /// Namespaced identifier, e.g. `rll::show-env`
    pub name: RecipeId,

    /// Human-readable description of what the recipe does
    #[serde(default)]
    pub description: String,
}

/// A typed configuration input declared by the cookbook
///
/// The hosting engine uses these declarations to render an operator-facing
/// input form and to validate supplied values. Actual attribute resolution
/// happens in the engine at convergence time, not here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AttributeDeclaration {
    /// Environment-style name, uppercase by convention (e.g. `HOSTNAME`)
    pub key: String,

    /// Label shown to operators (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,

    /// Help text shown to operators (optional)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Whether the engine requires a value for this attribute
    #[serde(default)]
    pub required: Requirement,

    /// Declared primitive type of the attribute value
    #[serde(rename = "type", default)]
    pub value_type: AttributeType,

    /// Default value, either a literal or an `env:<VAR>` reference token
    ///
    /// Stored verbatim so the manifest round-trips; use
    /// [`env_reference`](Self::env_reference) to inspect the indirection.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<String>,

    /// Recipes for which this attribute is relevant
    ///
    /// Must be a subset of the manifest's top-level recipe list; an empty
    /// list means the attribute applies cookbook-wide.
    #[serde(default)]
    pub recipes: Vec<RecipeId>,
}

/// Requirement level for an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Requirement {
    /// The engine may converge without a value
    #[default]
    Optional,
    /// A value should be supplied but the engine will not refuse to run
    Recommended,
    /// The engine refuses to converge without a value
    Required,
}

/// Declared primitive type of an attribute value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum AttributeType {
    #[default]
    String,
    Boolean,
    Numeric,
    Array,
    Hash,
}

impl CookbookManifest {
    /// Look up an attribute declaration by key
    ///
    /// Returns `None` for unknown keys; an absent attribute means "use the
    /// hosting engine's default", never an error.
    pub fn get_attribute(&self, key: &str) -> Option<&AttributeDeclaration> {
        self.attributes.iter().find(|a| a.key == key)
    }

    /// The set of recipes an attribute is scoped to
    ///
    /// Empty set if the key is unknown or the attribute is unscoped.
    pub fn recipes_for_attribute(&self, key: &str) -> BTreeSet<&RecipeId> {
        self.get_attribute(key)
            .map(|a| a.recipes.iter().collect())
            .unwrap_or_default()
    }

    /// Look up a recipe entry by identifier
    pub fn recipe(&self, id: &RecipeId) -> Option<&RecipeEntry> {
        self.recipes.iter().find(|r| r.name == *id)
    }

    /// Check whether the cookbook declares a recipe
    pub fn has_recipe(&self, id: &RecipeId) -> bool {
        self.recipe(id).is_some()
    }

    /// The attribute declarations relevant to one recipe
    ///
    /// This is the view the hosting engine renders as the input form for a
    /// recipe. Declaration order is preserved.
    pub fn attributes_for_recipe(&self, id: &RecipeId) -> Vec<&AttributeDeclaration> {
        self.attributes
            .iter()
            .filter(|a| a.recipes.contains(id))
            .collect()
    }

    /// Serialize the manifest back to TOML
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self)
            .map_err(|e| Error::Parse(format!("Failed to serialize manifest: {}", e)))
    }
}

impl AttributeDeclaration {
    /// The environment variable this attribute's default defers to, if any
    ///
    /// A default of `"env:RS_SERVER_NAME"` yields `Some("RS_SERVER_NAME")`;
    /// literal defaults and absent defaults yield `None`. Resolution of the
    /// variable is the hosting engine's job.
    pub fn env_reference(&self) -> Option<&str> {
        self.default.as_deref()?.strip_prefix("env:")
    }
}

impl fmt::Display for Requirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Requirement::Optional => write!(f, "optional"),
            Requirement::Recommended => write!(f, "recommended"),
            Requirement::Required => write!(f, "required"),
        }
    }
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::String => write!(f, "string"),
            AttributeType::Boolean => write!(f, "boolean"),
            AttributeType::Numeric => write!(f, "numeric"),
            AttributeType::Array => write!(f, "array"),
            AttributeType::Hash => write!(f, "hash"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_manifest() -> CookbookManifest {
        CookbookManifest {
            name: "rll".to_string(),
            maintainer: Some("ops".to_string()),
            license: None,
            description: None,
            version: "10.0.1".to_string(),
            recipes: vec![
                RecipeEntry {
                    name: RecipeId::new("rll", "show-env"),
                    description: "show env vars".to_string(),
                },
                RecipeEntry {
                    name: RecipeId::new("rll", "setup-hostname"),
                    description: "set the hostname".to_string(),
                },
            ],
            attributes: vec![AttributeDeclaration {
                key: "HOSTNAME".to_string(),
                display_name: Some("Hostname for this server".to_string()),
                description: None,
                required: Requirement::Optional,
                value_type: AttributeType::String,
                default: Some("env:RS_SERVER_NAME".to_string()),
                recipes: vec![RecipeId::new("rll", "show-env")],
            }],
        }
    }

    #[test]
    fn test_get_attribute() {
        let manifest = sample_manifest();
        let attr = manifest.get_attribute("HOSTNAME").unwrap();
        assert_eq!(attr.required, Requirement::Optional);
        assert_eq!(attr.value_type, AttributeType::String);
        assert!(manifest.get_attribute("NOPE").is_none());
    }

    #[test]
    fn test_recipes_for_attribute() {
        let manifest = sample_manifest();
        let scoped = manifest.recipes_for_attribute("HOSTNAME");
        assert_eq!(scoped.len(), 1);
        assert!(scoped.contains(&RecipeId::new("rll", "show-env")));

        // Unknown keys yield an empty set, not an error
        assert!(manifest.recipes_for_attribute("NOPE").is_empty());
    }

    #[test]
    fn test_attributes_for_recipe() {
        let manifest = sample_manifest();
        let show_env = RecipeId::new("rll", "show-env");
        let setup = RecipeId::new("rll", "setup-hostname");

        let attrs = manifest.attributes_for_recipe(&show_env);
        assert_eq!(attrs.len(), 1);
        assert_eq!(attrs[0].key, "HOSTNAME");

        assert!(manifest.attributes_for_recipe(&setup).is_empty());
    }

    #[test]
    fn test_env_reference() {
        let manifest = sample_manifest();
        let attr = manifest.get_attribute("HOSTNAME").unwrap();
        assert_eq!(attr.env_reference(), Some("RS_SERVER_NAME"));

        let mut literal = attr.clone();
        literal.default = Some("my.example.com".to_string());
        assert_eq!(literal.env_reference(), None);

        let mut absent = attr.clone();
        absent.default = None;
        assert_eq!(absent.env_reference(), None);
    }
}
