// Shared test helpers for integration tests
#![allow(dead_code)]

use device_matrix::catalog::{CatalogDomains, DeviceCatalog};
use device_matrix::config::Configuration;
use device_matrix::models::{DimensionKind, Type};
use std::fs;
use std::path::PathBuf;

pub fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

pub fn load_fixture_catalog(name: &str) -> DeviceCatalog {
    let content = fs::read_to_string(fixture_path(name)).expect("Failed to read fixture catalog");
    serde_json::from_str(&content).expect("Failed to parse fixture catalog")
}

/// Devices [Nexus6, hammerhead, mako, Nexus9, shamu], APIs [19, 21, 22, 23],
/// locale en (default), orientations [landscape, portrait (default)].
pub fn sample_domains() -> CatalogDomains {
    CatalogDomains::from_catalog(&load_fixture_catalog("sample_catalog.json"))
}

/// Devices [Nexus5, Nexus7], APIs [18, 19], locales [en, fr, de],
/// orientations [portrait, landscape].
pub fn expand_domains() -> CatalogDomains {
    CatalogDomains::from_catalog(&load_fixture_catalog("expand_catalog.json"))
}

pub fn plain_type(id: &str) -> Type {
    Type::new(id, id)
}

/// Builds domains in code, display name = id.
pub fn domains_of(devices: &[&str], apis: &[&str], languages: &[&str], orientations: &[&str]) -> CatalogDomains {
    let types = |ids: &[&str]| ids.iter().map(|id| plain_type(id)).collect::<Vec<_>>();
    CatalogDomains::new(types(devices), types(apis), types(languages), types(orientations))
}

/// The Nexus5/Nexus7 × 19/18 × de/en/fr × portrait configuration.
pub fn nexus_configuration() -> Configuration {
    let mut config = Configuration::new("Nexus smoke", &expand_domains(), Vec::new());
    config.enable(DimensionKind::Device, &["Nexus5", "Nexus7"]).unwrap();
    config.enable(DimensionKind::Api, &["19", "18"]).unwrap();
    config.enable(DimensionKind::Language, &["en", "de", "fr"]).unwrap();
    config.enable(DimensionKind::Orientation, &["portrait"]).unwrap();
    config
}

pub fn ids(types: &[Type]) -> Vec<&str> {
    types.iter().map(|t| t.id.as_str()).collect()
}
