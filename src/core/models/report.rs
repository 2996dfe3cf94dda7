//! Verification results and score reports

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::defect::{Category, Tier};

/// Outcome of checking one defect against one corpus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct VerificationResult {
    /// Whether the defect counts as fixed
    pub fixed: bool,
    /// Points earned (0 when not fixed)
    pub points_awarded: u32,
}

impl VerificationResult {
    /// A fixed defect worth `points`
    #[must_use]
    pub const fn fixed(points: u32) -> Self {
        Self {
            fixed: true,
            points_awarded: points,
        }
    }

    /// A defect that is still present
    #[must_use]
    pub const fn not_fixed() -> Self {
        Self {
            fixed: false,
            points_awarded: 0,
        }
    }
}

/// How a score was produced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScoreBasis {
    /// Every catalogued defect was verified
    #[default]
    Catalog,
    /// The site has no catalog; points for file presence only
    Presence,
    /// The site id is not configured
    UnknownSite,
    /// The submission directory does not exist
    MissingSubmission,
}

impl std::fmt::Display for ScoreBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Catalog => write!(f, "catalog"),
            Self::Presence => write!(f, "presence"),
            Self::UnknownSite => write!(f, "unknown site"),
            Self::MissingSubmission => write!(f, "missing submission"),
        }
    }
}

/// Per-defect line of a report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DefectOutcome {
    /// Defect id
    pub id: String,
    /// File category
    pub category: Category,
    /// Difficulty tier
    pub tier: Tier,
    /// Whether it was fixed
    pub fixed: bool,
    /// Points earned
    pub points: u32,
}

/// Tally for one category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CategoryTally {
    /// Defects fixed
    pub fixed: usize,
    /// Defects in the catalog for this category
    pub total: usize,
    /// Points earned
    pub points: u32,
}

/// Full result of scoring one submission
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreReport {
    /// Sum of awarded points
    pub total_score: u32,
    /// Number of fixed defects
    pub fixed_count: usize,
    /// Number of catalogued defects
    pub total_count: usize,
    /// Per-category breakdown
    pub per_category: BTreeMap<Category, CategoryTally>,
    /// Per-defect outcomes in catalog order
    pub defects: Vec<DefectOutcome>,
    /// How the score was produced
    pub basis: ScoreBasis,
}

impl ScoreReport {
    /// A zero report for a submission that could not be scored
    #[must_use]
    pub fn rejected(basis: ScoreBasis) -> Self {
        Self {
            basis,
            ..Self::default()
        }
    }

    /// Presence-only report
    #[must_use]
    pub fn presence(points: u32) -> Self {
        Self {
            total_score: points,
            basis: ScoreBasis::Presence,
            ..Self::default()
        }
    }

    /// Add one verified defect to the totals
    pub fn push(&mut self, outcome: DefectOutcome) {
        let tally = self.per_category.entry(outcome.category).or_default();
        tally.total += 1;
        self.total_count += 1;
        if outcome.fixed {
            tally.fixed += 1;
            tally.points += outcome.points;
            self.fixed_count += 1;
            self.total_score += outcome.points;
        }
        self.defects.push(outcome);
    }
}
