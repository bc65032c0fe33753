// src/manifest/mod.rs

//! Cookbook manifest system
//!
//! A manifest declares everything the hosting configuration-management
//! engine needs to know about a cookbook without running it:
//! - Identity: name, maintainer, license, description, version
//! - Recipes: the units of work the cookbook provides
//! - Attributes: typed configuration inputs, scoped to the recipes
//!   that consume them
//!
//! The manifest is loaded once and never mutated; the engine reads it to
//! render input forms, validate operator input, and offer recipes to run.
//!
//! # Example Manifest
//!
//! ```toml
//! name = "rll"
//! maintainer = "ops"
//! license = "see LICENSE file in repository root"
//! description = "Base scripts to initialize basic functionality"
//! version = "10.0.1"
//!
//! [[recipes]]
//! name = "rll::show-env"
//! description = "show env vars"
//!
//! [[attributes]]
//! key = "HOSTNAME"
//! display_name = "Hostname for this server"
//! required = "optional"
//! type = "string"
//! default = "env:RS_SERVER_NAME"
//! recipes = ["rll::show-env"]
//! ```
//!
//! Attribute defaults may use the `env:<VAR>` form to defer to an
//! environment value supplied by the hosting engine at convergence time.
//! The manifest records the indirection; it never resolves it.

mod format;
pub mod parser;

pub use format::{AttributeDeclaration, AttributeType, CookbookManifest, RecipeEntry, Requirement};
pub use parser::{
    load_manifest, load_manifest_file, parse_manifest, parse_manifest_file, validate_manifest,
};
