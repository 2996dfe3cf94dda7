//! Submission scoring against the designated files on disk
//!
//! Wraps the pure [`score_corpora`] aggregation with site lookup, file
//! reading and the fail-closed rules: an unknown site or a missing
//! submission scores zero, and a site without a catalog falls back to
//! presence points.

use std::path::Path;

use log::{info, warn};

use crate::adapters::file::read_corpus;
use crate::adapters::toml::{builtin_catalogs, load_catalog_dir};
use crate::config::{AppConfig, SiteConfig};
use crate::core::models::{CatalogSet, ScoreBasis, ScoreReport};
use crate::core::services::{PresencePoints, score_corpora};

/// Scores submission directories for the configured sites
#[derive(Debug)]
pub struct Scorer {
    sites: Vec<SiteConfig>,
    catalogs: CatalogSet,
    presence: PresencePoints,
}

impl Scorer {
    /// Create a scorer from already-loaded parts
    #[must_use]
    pub const fn new(sites: Vec<SiteConfig>, catalogs: CatalogSet, presence: PresencePoints) -> Self {
        Self {
            sites,
            catalogs,
            presence,
        }
    }

    /// Build the scorer described by `config`
    ///
    /// Catalogs come from `scoring.catalog_dir` when set, otherwise from the
    /// ones built into the binary.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let catalogs = match &config.scoring.catalog_dir {
            Some(dir) => load_catalog_dir(dir)?,
            None => builtin_catalogs()?,
        };
        info!("Loaded {} site catalog(s)", catalogs.len());

        for site in &config.sites {
            if catalogs.get(site.id).is_err() {
                warn!("Site {} has no catalog; presence scoring applies", site.id);
            }
        }

        Ok(Self::new(config.sites.clone(), catalogs, config.presence_points()))
    }

    /// Configured sites
    #[must_use]
    pub fn sites(&self) -> &[SiteConfig] {
        &self.sites
    }

    /// Look up one configured site
    #[must_use]
    pub fn site(&self, id: u32) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// Loaded catalogs
    #[must_use]
    pub const fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Total score of the submission at `root` for `site_id`
    #[must_use]
    pub fn score(&self, root: &Path, site_id: u32) -> u32 {
        self.score_detailed(root, site_id).total_score
    }

    /// Full report for the submission at `root` for `site_id`
    ///
    /// Never fails: every problem maps to a zero or reduced score.
    #[must_use]
    pub fn score_detailed(&self, root: &Path, site_id: u32) -> ScoreReport {
        let Some(site) = self.site(site_id) else {
            warn!("Rejecting submission for unknown site {site_id}");
            return ScoreReport::rejected(ScoreBasis::UnknownSite);
        };

        if !root.is_dir() {
            warn!("Submission directory {} does not exist", root.display());
            return ScoreReport::rejected(ScoreBasis::MissingSubmission);
        }

        let markup_path = root.join(&site.markup_file);
        let stylesheet_path = root.join(&site.stylesheet_file);

        let Ok(catalog) = self.catalogs.get(site_id) else {
            let points = self
                .presence
                .award(markup_path.is_file(), stylesheet_path.is_file());
            info!("Site {site_id} scored by file presence: {points}");
            return ScoreReport::presence(points);
        };

        let markup = read_corpus(&markup_path);
        let stylesheet = read_corpus(&stylesheet_path);
        let report = score_corpora(catalog, &markup, &stylesheet);
        info!(
            "Site {site_id}: {}/{} defects fixed, {} points",
            report.fixed_count, report.total_count, report.total_score
        );
        report
    }
}
