//! Shared test fixtures and helpers
//!
//! This module provides common utilities for testing bountyboard components.

use std::fs;
use std::path::{Path, PathBuf};

use bountyboard::adapters::toml::builtin_catalogs;
use bountyboard::config::AppConfig;
use bountyboard::context::AppContext;
use bountyboard::core::models::{Category, SiteCatalog};
use tempfile::TempDir;

/// An event with its own data directory and the built-in catalogs
pub struct TestEvent {
    dir: TempDir,
    pub ctx: AppContext,
}

impl TestEvent {
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let mut config = AppConfig::default();
        config.storage.data_dir = dir.path().join("data");
        let ctx = AppContext::from_config(config).expect("failed to build context");
        Self { dir, ctx }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn data_dir(&self) -> PathBuf {
        self.ctx.config.storage.data_dir.clone()
    }
}

/// Built-in catalog for one site
pub fn catalog(site_id: u32) -> SiteCatalog {
    builtin_catalogs()
        .unwrap()
        .get(site_id)
        .unwrap()
        .clone()
}

/// Every original snippet of one category, one per line
///
/// A corpus like this fixes every defect of the category.
pub fn originals(site_id: u32, category: Category) -> String {
    catalog(site_id)
        .by_category(category)
        .map(|d| d.original().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every non-empty corrupted snippet of one category, one per line
///
/// A corpus like this fixes no defect of the category.
pub fn corrupted(site_id: u32, category: Category) -> String {
    catalog(site_id)
        .by_category(category)
        .filter(|d| !d.modified().is_empty())
        .map(|d| d.modified().to_string())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write a submission directory with the given markup and stylesheet files
pub fn write_site(root: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(root).unwrap();
    for (name, content) in files {
        fs::write(root.join(name), content).unwrap();
    }
}
