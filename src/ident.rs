// src/ident.rs

//! Namespaced recipe identifiers
//!
//! Recipes are identified using the format `cookbook::recipe`:
//!
//! - `rll::show-env` - the show-env recipe from the rll cookbook
//! - `nginx::default` - the default recipe from the nginx cookbook
//!
//! The cookbook component namespaces recipes so that attribute scopes and
//! run lists can reference recipes from any cookbook unambiguously.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A namespaced recipe identifier
///
/// Format: `cookbook::recipe`
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct RecipeId {
    /// Cookbook the recipe belongs to
    pub cookbook: String,
    /// Recipe name within the cookbook
    pub recipe: String,
}

impl RecipeId {
    /// Create a new recipe identifier
    pub fn new(cookbook: impl Into<String>, recipe: impl Into<String>) -> Self {
        Self {
            cookbook: cookbook.into(),
            recipe: recipe.into(),
        }
    }

    /// Parse a recipe identifier from string format `cookbook::recipe`
    pub fn parse(s: &str) -> Result<Self, RecipeIdParseError> {
        let sep_pos = s
            .find("::")
            .ok_or_else(|| RecipeIdParseError::MissingSeparator(s.to_string()))?;

        let cookbook = &s[..sep_pos];
        let recipe = &s[sep_pos + 2..];

        // Validate components are not empty
        if cookbook.is_empty() {
            return Err(RecipeIdParseError::EmptyCookbook(s.to_string()));
        }
        if recipe.is_empty() {
            return Err(RecipeIdParseError::EmptyRecipe(s.to_string()));
        }

        // Validate characters (alphanumeric, dots, hyphens, underscores)
        let valid_chars = |c: char| c.is_alphanumeric() || c == '.' || c == '-' || c == '_';

        if !cookbook.chars().all(valid_chars) {
            return Err(RecipeIdParseError::InvalidCookbook(cookbook.to_string()));
        }
        if !recipe.chars().all(valid_chars) {
            return Err(RecipeIdParseError::InvalidRecipe(recipe.to_string()));
        }

        Ok(Self {
            cookbook: cookbook.to_string(),
            recipe: recipe.to_string(),
        })
    }

    /// Check if this recipe belongs to the same cookbook as another
    pub fn same_cookbook(&self, other: &RecipeId) -> bool {
        self.cookbook == other.cookbook
    }
}

impl fmt::Display for RecipeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}::{}", self.cookbook, self.recipe)
    }
}

impl FromStr for RecipeId {
    type Err = RecipeIdParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        RecipeId::parse(s)
    }
}

impl TryFrom<String> for RecipeId {
    type Error = RecipeIdParseError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        RecipeId::parse(&s)
    }
}

impl From<RecipeId> for String {
    fn from(id: RecipeId) -> Self {
        id.to_string()
    }
}

/// Errors that can occur when parsing a recipe identifier
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecipeIdParseError {
    /// Missing :: separator
    #[error("Missing '::' in recipe identifier: {0}")]
    MissingSeparator(String),
    /// Empty cookbook component
    #[error("Empty cookbook in recipe identifier: {0}")]
    EmptyCookbook(String),
    /// Empty recipe component
    #[error("Empty recipe in recipe identifier: {0}")]
    EmptyRecipe(String),
    /// Invalid characters in cookbook
    #[error("Invalid cookbook name: {0}")]
    InvalidCookbook(String),
    /// Invalid characters in recipe
    #[error("Invalid recipe name: {0}")]
    InvalidRecipe(String),
}
