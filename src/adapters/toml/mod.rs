//! TOML-based defect catalogs
//!
//! - [`catalog`] - Read and deserialize per-site catalog files

pub mod catalog;

pub use catalog::{
    CatalogFile, CatalogHeader, DefectRecord, builtin_catalogs, load_catalog_dir,
    load_catalog_file, parse_catalog,
};
