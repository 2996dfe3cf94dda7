//! Leaderboard entry model
//!
//! One entry per participant: the best score they have submitted so far.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Maximum score shown next to every entry unless configured otherwise
///
/// A display ceiling of thirty defects at hard-tier points. It is not derived
/// from the loaded catalogs; each site's real maximum is reported with its
/// catalog.
pub const DEFAULT_MAX_SCORE: u32 = 900;

/// A participant's best recorded submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardEntry {
    /// Participant (team) name, the unique key
    pub participant: String,

    /// Site the score was earned on
    pub site_id: u32,

    /// Best score so far
    pub score: u32,

    /// Seconds from timer start to the submission
    pub elapsed_seconds: u64,

    /// When the entry was last written
    pub timestamp: DateTime<Utc>,

    /// Declared maximum possible score
    pub max_score: u32,
}

impl LeaderboardEntry {
    /// Create an entry stamped with the current time
    #[must_use]
    pub fn new(
        participant: impl Into<String>,
        site_id: u32,
        score: u32,
        elapsed_seconds: u64,
        max_score: u32,
    ) -> Self {
        Self {
            participant: participant.into(),
            site_id,
            score,
            elapsed_seconds,
            timestamp: Utc::now(),
            max_score,
        }
    }
}
