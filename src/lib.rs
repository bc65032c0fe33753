// src/lib.rs

//! Larder cookbook manifests
//!
//! Cookbook metadata manifests for configuration-management engines. A
//! manifest declares a cookbook's identity (name, maintainer, license,
//! description, version), the recipes the cookbook provides, and the typed
//! attributes those recipes consume. The hosting engine reads the manifest to
//! render operator-facing input forms, validate configuration, and decide
//! which recipes to run; larder never executes recipes itself.
//!
//! # Architecture
//!
//! - Manifest-first: everything a cookbook exposes is declared in one
//!   TOML manifest, loaded once and immutable thereafter
//! - Typed identifiers: recipes are addressed as `cookbook::recipe`
//! - Scoped attributes: each attribute declares the recipes it applies to,
//!   checked for referential integrity at load time
//! - Environment indirection: `env:<VAR>` default tokens are surfaced to the
//!   hosting engine, never resolved here

mod error;
pub mod ident;
pub mod manifest;

pub use error::{Error, Result};
pub use ident::{RecipeId, RecipeIdParseError};
pub use manifest::{
    load_manifest, load_manifest_file, parse_manifest, parse_manifest_file, validate_manifest,
    AttributeDeclaration, AttributeType, CookbookManifest, RecipeEntry, Requirement,
};
