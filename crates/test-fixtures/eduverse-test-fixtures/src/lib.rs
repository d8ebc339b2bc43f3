//! Shared page-motion fixtures for workspace tests.
//!
//! Documents live under the workspace `fixtures/` directory and are listed in
//! `fixtures/manifest.json`; consumers load them by name.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use once_cell::sync::Lazy;
use serde::Deserialize;

static MANIFEST: Lazy<Manifest> = Lazy::new(|| {
    let raw = include_str!("../../../../fixtures/manifest.json");
    serde_json::from_str(raw).expect("fixtures manifest should parse")
});

#[derive(Debug, Deserialize)]
struct Manifest {
    pages: HashMap<String, String>,
}

fn fixtures_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../../../fixtures")
}

fn read_to_string(rel: &str) -> Result<String> {
    let path = fixtures_root().join(rel);
    fs::read_to_string(&path)
        .with_context(|| format!("failed to read fixture at {}", path.display()))
}

/// Names of every stored page document in the manifest.
pub fn page_names() -> Vec<String> {
    let mut names: Vec<String> = MANIFEST.pages.keys().cloned().collect();
    names.sort();
    names
}

/// Raw JSON for a stored page document by manifest name.
pub fn load_page_json(name: &str) -> Result<String> {
    let rel = MANIFEST
        .pages
        .get(name)
        .ok_or_else(|| anyhow!("unknown page fixture '{name}'"))?;
    read_to_string(rel)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manifest_lists_all_pages() {
        let names = page_names();
        for expected in ["about", "chrome", "contact", "courses", "home"] {
            assert!(names.iter().any(|n| n == expected), "missing {expected}");
        }
    }

    #[test]
    fn every_page_loads() {
        for name in page_names() {
            let raw = load_page_json(&name).unwrap();
            assert!(!raw.is_empty());
            let _: serde_json::Value = serde_json::from_str(&raw).unwrap();
        }
    }
}
