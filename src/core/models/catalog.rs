//! Site catalogs
//!
//! A site catalog is the ordered list of defects injected into one site
//! template. Catalogs are built once at startup and never mutated.

use std::collections::BTreeMap;
use std::collections::HashSet;

use thiserror::Error;

use super::defect::{Category, DefectEntry};

/// Errors raised while building or querying catalogs
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// No catalog is registered for the site
    #[error("no defect catalog for site {0}")]
    NotFound(u32),

    /// Two defects of one site share an id
    #[error("duplicate defect id '{id}' in site {site_id}")]
    DuplicateDefect {
        /// Site the duplicate was found in
        site_id: u32,
        /// The repeated id
        id: String,
    },

    /// Two catalogs were supplied for the same site
    #[error("duplicate catalog for site {0}")]
    DuplicateSite(u32),

    /// A defect id follows no naming convention and has no explicit category
    #[error("cannot derive category for defect '{0}' (expected an html or css prefix)")]
    UnknownCategory(String),
}

/// Ordered defects of one site
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteCatalog {
    site_id: u32,
    defects: Vec<DefectEntry>,
}

impl SiteCatalog {
    /// Build a catalog, rejecting duplicate defect ids
    pub fn new(site_id: u32, defects: Vec<DefectEntry>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for defect in &defects {
            if !seen.insert(defect.id()) {
                return Err(CatalogError::DuplicateDefect {
                    site_id,
                    id: defect.id().to_string(),
                });
            }
        }
        Ok(Self { site_id, defects })
    }

    /// Site this catalog belongs to
    #[must_use]
    pub const fn site_id(&self) -> u32 {
        self.site_id
    }

    /// All defects in catalog order
    #[must_use]
    pub fn defects(&self) -> &[DefectEntry] {
        &self.defects
    }

    /// Defects checked against the given file category
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &DefectEntry> {
        self.defects.iter().filter(move |d| d.category() == category)
    }

    /// Number of defects
    #[must_use]
    pub fn total_defects(&self) -> usize {
        self.defects.len()
    }

    /// Sum of the points of every defect
    #[must_use]
    pub fn max_score(&self) -> u32 {
        self.defects.iter().map(DefectEntry::points).sum()
    }
}

/// Immutable table of site catalogs indexed by site id
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogSet {
    catalogs: BTreeMap<u32, SiteCatalog>,
}

impl CatalogSet {
    /// Build the table, rejecting two catalogs for one site
    pub fn new(catalogs: impl IntoIterator<Item = SiteCatalog>) -> Result<Self, CatalogError> {
        let mut map = BTreeMap::new();
        for catalog in catalogs {
            let site_id = catalog.site_id();
            if map.insert(site_id, catalog).is_some() {
                return Err(CatalogError::DuplicateSite(site_id));
            }
        }
        Ok(Self { catalogs: map })
    }

    /// Look up the catalog of a site
    pub fn get(&self, site_id: u32) -> Result<&SiteCatalog, CatalogError> {
        self.catalogs.get(&site_id).ok_or(CatalogError::NotFound(site_id))
    }

    /// Iterate catalogs in site id order
    pub fn iter(&self) -> impl Iterator<Item = &SiteCatalog> {
        self.catalogs.values()
    }

    /// Number of sites with a catalog
    #[must_use]
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// True when no catalog is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }
}
