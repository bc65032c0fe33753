// src/error.rs

//! Error types for manifest loading

use thiserror::Error;

/// Result type for manifest operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while loading a cookbook manifest
///
/// Loading is all-or-nothing: a manifest either loads completely or fails
/// with one of these. Attribute lookups on a loaded manifest never fail;
/// an unknown key is an `Option::None`, not an error.
#[derive(Error, Debug)]
pub enum Error {
    /// Manifest file could not be read
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Manifest source is not valid TOML
    #[error("invalid manifest syntax: {0}")]
    Parse(String),

    /// Manifest parsed but violates a structural invariant (missing identity
    /// fields, duplicate keys, or attribute scopes naming undeclared recipes)
    #[error("malformed manifest: {0}")]
    MalformedManifest(String),
}
