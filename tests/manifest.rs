// tests/manifest.rs

//! Cookbook manifest loading, validation, and lookup tests.

use larder::{load_manifest, load_manifest_file, AttributeType, Error, RecipeId, Requirement};
use std::io::Write;
use tempfile::NamedTempFile;

/// The RightLink10 base cookbook manifest, used as the reference scenario
const RLL_MANIFEST: &str = include_str!("../demos/rll.toml");

#[test]
fn test_load_reference_manifest() {
    let manifest = load_manifest(RLL_MANIFEST).unwrap();

    assert_eq!(manifest.name, "rll");
    assert_eq!(manifest.maintainer.as_deref(), Some("ops"));
    assert_eq!(manifest.version, "10.0.1");

    assert_eq!(manifest.recipes.len(), 1);
    let entry = &manifest.recipes[0];
    assert_eq!(entry.name, RecipeId::new("rll", "show-env"));
    assert_eq!(entry.description, "show env vars");

    assert_eq!(manifest.attributes.len(), 1);
    let attr = manifest.get_attribute("HOSTNAME").unwrap();
    assert_eq!(attr.display_name.as_deref(), Some("Hostname for this server"));
    assert_eq!(attr.required, Requirement::Optional);
    assert_eq!(attr.value_type, AttributeType::String);
    assert_eq!(attr.default.as_deref(), Some("env:RS_SERVER_NAME"));
    assert_eq!(attr.env_reference(), Some("RS_SERVER_NAME"));

    let scoped = manifest.recipes_for_attribute("HOSTNAME");
    assert_eq!(scoped.len(), 1);
    assert!(scoped.contains(&RecipeId::new("rll", "show-env")));
}

#[test]
fn test_round_trip() {
    let manifest = load_manifest(RLL_MANIFEST).unwrap();
    let serialized = manifest.to_toml_string().unwrap();
    let reloaded = load_manifest(&serialized).unwrap();
    assert_eq!(manifest, reloaded);
}

#[test]
fn test_load_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(RLL_MANIFEST.as_bytes()).unwrap();

    let manifest = load_manifest_file(file.path()).unwrap();
    assert_eq!(manifest.name, "rll");
    assert_eq!(manifest.version, "10.0.1");
}

#[test]
fn test_load_missing_file() {
    let result = load_manifest_file(std::path::Path::new("/nonexistent/metadata.toml"));
    assert!(matches!(result, Err(Error::Io(_))));
}

#[test]
fn test_idempotent_lookup() {
    let manifest = load_manifest(RLL_MANIFEST).unwrap();
    let first = manifest.get_attribute("HOSTNAME").unwrap();
    let second = manifest.get_attribute("HOSTNAME").unwrap();
    assert_eq!(first, second);
    assert!(std::ptr::eq(first, second));
}

#[test]
fn test_unknown_attribute_key() {
    let manifest = load_manifest(RLL_MANIFEST).unwrap();
    assert!(manifest.get_attribute("NOPE").is_none());
    assert!(manifest.recipes_for_attribute("NOPE").is_empty());
}

#[test]
fn test_referential_integrity() {
    let content = r#"
name = "rll"
version = "10.0.1"

[[recipes]]
name = "rll::show-env"
description = "show env vars"

[[attributes]]
key = "HOSTNAME"
required = "optional"
type = "string"
recipes = ["rll::missing"]
"#;
    assert!(matches!(
        load_manifest(content),
        Err(Error::MalformedManifest(_))
    ));
}

#[test]
fn test_missing_identity_fields() {
    assert!(matches!(
        load_manifest(r#"version = "10.0.1""#),
        Err(Error::MalformedManifest(_))
    ));
    assert!(matches!(
        load_manifest(r#"name = "rll""#),
        Err(Error::MalformedManifest(_))
    ));
}

#[test]
fn test_attributes_for_recipe() {
    let manifest = load_manifest(RLL_MANIFEST).unwrap();
    let show_env = RecipeId::new("rll", "show-env");
    let attrs = manifest.attributes_for_recipe(&show_env);
    assert_eq!(attrs.len(), 1);
    assert_eq!(attrs[0].key, "HOSTNAME");

    let other = RecipeId::new("rll", "wait-for-eip");
    assert!(manifest.attributes_for_recipe(&other).is_empty());
}

#[test]
fn test_json_view() {
    // The CLI emits manifests as JSON; make sure the serde surface holds up
    let manifest = load_manifest(RLL_MANIFEST).unwrap();
    let json = serde_json::to_string(&manifest).unwrap();
    assert!(json.contains("\"rll::show-env\""));
    assert!(json.contains("\"env:RS_SERVER_NAME\""));

    let reloaded: larder::CookbookManifest = serde_json::from_str(&json).unwrap();
    assert_eq!(manifest, reloaded);
}
