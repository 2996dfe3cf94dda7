//! TOML parser for defect catalog files
//!
//! One file per site:
//!
//! ```toml
//! [site]
//! id = 1
//! name = "E-commerce Site"
//!
//! [[defect]]
//! id = "html_doctype"
//! tier = "easy"
//! original = "<!DOCTYPE html>"
//! modified = ""
//! description = "Document type declaration removed"
//! ```
//!
//! The category of a defect is taken from its `category` field, or derived
//! from the `html`/`css` id prefix.

use std::fs;
use std::path::Path;

use anyhow::Context;
use include_dir::{Dir, include_dir};
use serde::Deserialize;

use crate::core::models::{CatalogError, CatalogSet, Category, DefectEntry, SiteCatalog, Tier};

/// Catalogs compiled into the binary
static BUILTIN_CATALOGS: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/catalogs");

/// A catalog file structure
#[derive(Debug, Deserialize)]
pub struct CatalogFile {
    /// Site header
    pub site: CatalogHeader,

    /// Defects in catalog order
    #[serde(default, rename = "defect")]
    pub defects: Vec<DefectRecord>,
}

/// Site header of a catalog file
#[derive(Debug, Deserialize)]
pub struct CatalogHeader {
    /// Site id the catalog applies to
    pub id: u32,

    /// Display name
    #[serde(default)]
    pub name: Option<String>,
}

/// A defect entry in a catalog file
#[derive(Debug, Deserialize)]
pub struct DefectRecord {
    /// Defect id, unique within the file
    pub id: String,

    /// Explicit category (markup or style)
    #[serde(default)]
    pub category: Option<Category>,

    /// Difficulty tier
    #[serde(default)]
    pub tier: Tier,

    /// Correct snippet
    pub original: String,

    /// Broken snippet
    #[serde(default)]
    pub modified: String,

    /// Description shown to admins
    #[serde(default)]
    pub description: String,
}

impl CatalogFile {
    /// Build the immutable site catalog
    pub fn into_catalog(self) -> Result<SiteCatalog, CatalogError> {
        let defects = self
            .defects
            .into_iter()
            .map(|record| {
                let category = record
                    .category
                    .or_else(|| Category::from_defect_id(&record.id))
                    .ok_or_else(|| CatalogError::UnknownCategory(record.id.clone()))?;
                Ok(DefectEntry::new(
                    record.id,
                    category,
                    record.tier,
                    record.original,
                    record.modified,
                    record.description,
                ))
            })
            .collect::<Result<Vec<_>, CatalogError>>()?;
        SiteCatalog::new(self.site.id, defects)
    }
}

/// Parse one catalog from TOML text
pub fn parse_catalog(content: &str) -> anyhow::Result<SiteCatalog> {
    let file: CatalogFile = toml::from_str(content)?;
    Ok(file.into_catalog()?)
}

/// Load one catalog file
pub fn load_catalog_file(path: &Path) -> anyhow::Result<SiteCatalog> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog file: {}", path.display()))?;
    parse_catalog(&content)
        .with_context(|| format!("Failed to parse catalog file: {}", path.display()))
}

/// Load every `*.toml` catalog in a directory
pub fn load_catalog_dir(dir: &Path) -> anyhow::Result<CatalogSet> {
    let pattern = format!("{}/*.toml", glob::Pattern::escape(&dir.to_string_lossy()));
    let mut paths = glob::glob(&pattern)?.collect::<Result<Vec<_>, _>>()?;
    paths.sort();

    let catalogs = paths
        .iter()
        .map(|path| load_catalog_file(path))
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CatalogSet::new(catalogs)?)
}

/// The catalogs shipped with the binary
pub fn builtin_catalogs() -> anyhow::Result<CatalogSet> {
    let mut files: Vec<_> = BUILTIN_CATALOGS
        .files()
        .filter(|f| f.path().extension().is_some_and(|ext| ext == "toml"))
        .collect();
    files.sort_by(|a, b| a.path().cmp(b.path()));

    let catalogs = files
        .into_iter()
        .map(|f| {
            let content = f
                .contents_utf8()
                .with_context(|| format!("Catalog is not UTF-8: {}", f.path().display()))?;
            parse_catalog(content)
                .with_context(|| format!("Failed to parse built-in catalog: {}", f.path().display()))
        })
        .collect::<anyhow::Result<Vec<_>>>()?;
    Ok(CatalogSet::new(catalogs)?)
}
