//! Submission scoring over already-read corpora
//!
//! Runs the verifier for every catalogued defect against the corpus of its
//! category and aggregates the results. No I/O happens here; see
//! [`crate::scoring::Scorer`] for the file-reading side.

use crate::core::models::{Category, DefectOutcome, ScoreReport, SiteCatalog};

use super::verifier::verify;

/// Score a catalog against the markup and stylesheet texts
#[must_use]
pub fn score_corpora(catalog: &SiteCatalog, markup: &str, stylesheet: &str) -> ScoreReport {
    let mut report = ScoreReport::default();

    for defect in catalog.defects() {
        let corpus = match defect.category() {
            Category::Markup => markup,
            Category::Style => stylesheet,
        };
        let result = verify(corpus, defect);
        report.push(DefectOutcome {
            id: defect.id().to_string(),
            category: defect.category(),
            tier: defect.tier(),
            fixed: result.fixed,
            points: result.points_awarded,
        });
    }

    report
}

/// Points for a site without a catalog: file presence only
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresencePoints {
    /// Awarded when the markup file exists
    pub markup: u32,
    /// Awarded when the stylesheet file exists
    pub stylesheet: u32,
}

impl Default for PresencePoints {
    fn default() -> Self {
        Self {
            markup: 200,
            stylesheet: 100,
        }
    }
}

impl PresencePoints {
    /// Total for the given file presence flags
    #[must_use]
    pub const fn award(self, has_markup: bool, has_stylesheet: bool) -> u32 {
        let mut points = 0;
        if has_markup {
            points += self.markup;
        }
        if has_stylesheet {
            points += self.stylesheet;
        }
        points
    }
}
