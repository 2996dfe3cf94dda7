//! Defect model
//!
//! A defect is one catalogued textual difference between the correct snippet
//! of a site template and the intentionally broken snippet handed out to
//! participants.

use serde::{Deserialize, Serialize};

use crate::core::services::verifier::{DefectKind, classify};

/// Which designated file of a submission a defect lives in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    /// Checked against the markup file
    Markup,
    /// Checked against the stylesheet file
    Style,
}

impl Category {
    /// Derive the category from the defect id naming convention
    ///
    /// Ids starting with `html` are markup defects, ids starting with `css`
    /// are style defects.
    #[must_use]
    pub fn from_defect_id(id: &str) -> Option<Self> {
        let lower = id.to_ascii_lowercase();
        if lower.starts_with("html") {
            Some(Self::Markup)
        } else if lower.starts_with("css") {
            Some(Self::Style)
        } else {
            None
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Markup => f.pad("markup"),
            Self::Style => f.pad("style"),
        }
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "markup" | "html" => Ok(Self::Markup),
            "style" | "css" => Ok(Self::Style),
            _ => Err(format!("Invalid category: {s}. Use: markup, style")),
        }
    }
}

/// Difficulty tier of a defect, which fixes its point value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    /// 10 points
    #[default]
    Easy,
    /// 20 points
    Medium,
    /// 30 points
    Hard,
}

impl Tier {
    /// Points awarded for fixing a defect of this tier
    #[must_use]
    pub const fn points(self) -> u32 {
        match self {
            Self::Easy => 10,
            Self::Medium => 20,
            Self::Hard => 30,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Easy => f.pad("easy"),
            Self::Medium => f.pad("medium"),
            Self::Hard => f.pad("hard"),
        }
    }
}

impl std::str::FromStr for Tier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Self::Easy),
            "medium" => Ok(Self::Medium),
            "hard" => Ok(Self::Hard),
            _ => Err(format!("Invalid tier: {s}. Use: easy, medium, hard")),
        }
    }
}

/// One injected defect of a site template
///
/// Immutable once built. The verification class is derived from the two
/// snippets at construction time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefectEntry {
    id: String,
    category: Category,
    tier: Tier,
    original: String,
    modified: String,
    description: String,
    kind: DefectKind,
}

impl DefectEntry {
    /// Create a defect entry and classify it
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        category: Category,
        tier: Tier,
        original: impl Into<String>,
        modified: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        let original = original.into();
        let modified = modified.into();
        let kind = classify(category, &original, &modified);
        Self {
            id: id.into(),
            category,
            tier,
            original,
            modified,
            description: description.into(),
            kind,
        }
    }

    /// Defect id, unique within its site
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Which file this defect is checked against
    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Difficulty tier
    #[must_use]
    pub const fn tier(&self) -> Tier {
        self.tier
    }

    /// The correct snippet
    #[must_use]
    pub fn original(&self) -> &str {
        &self.original
    }

    /// The broken snippet shipped in the template (may be empty)
    #[must_use]
    pub fn modified(&self) -> &str {
        &self.modified
    }

    /// Human-readable description of the defect
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Verification class derived from the snippets
    #[must_use]
    pub const fn kind(&self) -> &DefectKind {
        &self.kind
    }

    /// Points awarded when fixed
    #[must_use]
    pub const fn points(&self) -> u32 {
        self.tier.points()
    }
}
