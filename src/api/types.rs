//! API request and response types
//!
//! All types are framework-agnostic and can be used by any client.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::models::{Category, LeaderboardEntry, ScoreReport, Team, Tier, TimerStatus};

use super::error::ApiErrorData;

// =============================================================================
// RESPONSE ENVELOPE
// =============================================================================

/// Standard API response envelope
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    /// Whether the request succeeded
    pub success: bool,
    /// Response data (present on success)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    /// Error details (present on failure)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ApiErrorData>,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a successful response
    #[must_use]
    pub const fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            error: None,
        }
    }
}

impl ApiResponse<()> {
    /// Create an error response
    #[must_use]
    pub fn error(code: &str, message: &str) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiErrorData {
                code: code.to_string(),
                message: message.to_string(),
            }),
        }
    }
}

// =============================================================================
// REQUEST TYPES
// =============================================================================

/// Request body for a submission
///
/// The texts are written to the assigned site's designated file names.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitRequest {
    /// Team name
    pub team: String,
    /// Team password
    pub password: String,
    /// Markup file content
    #[serde(default)]
    pub markup: Option<String>,
    /// Stylesheet file content
    #[serde(default)]
    pub stylesheet: Option<String>,
}

/// Request body for starting the timer
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct StartTimerRequest {
    /// Event length in minutes
    #[serde(alias = "duration")]
    pub duration_minutes: u32,
}

/// Request body for overwriting a leaderboard entry
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct SetScoreRequest {
    /// New score
    pub score: u32,
    /// New elapsed time in seconds
    #[serde(alias = "duration")]
    pub elapsed_seconds: u64,
}

/// Request body for adding a team
#[derive(Debug, Clone, Deserialize)]
pub struct AddTeamRequest {
    /// Team name
    pub name: String,
    /// Team password
    pub password: String,
    /// Optional site assignment
    #[serde(default)]
    pub site_id: Option<u32>,
}

/// Request body for updating a team
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateTeamRequest {
    /// New password
    #[serde(default)]
    pub password: Option<String>,
    /// New site assignment
    #[serde(default)]
    pub site_id: Option<u32>,
}

// =============================================================================
// RESPONSE TYPES
// =============================================================================

/// Site summary
#[derive(Debug, Serialize)]
pub struct SiteInfo {
    /// Site id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Designated markup file
    pub markup_file: String,
    /// Designated stylesheet file
    pub stylesheet_file: String,
    /// Whether a defect catalog exists for the site
    pub has_catalog: bool,
    /// Catalogued defects
    pub total_defects: usize,
    /// Sum of defect points
    pub max_score: u32,
}

/// Response for `GET /sites`
#[derive(Debug, Serialize)]
pub struct SitesData {
    /// Configured sites in id order
    pub sites: Vec<SiteInfo>,
}

/// One catalogued defect, without its snippets
#[derive(Debug, Serialize)]
pub struct DefectInfo {
    /// Defect id
    pub id: String,
    /// Category
    pub category: Category,
    /// Difficulty tier
    pub tier: Tier,
    /// Points when fixed
    pub points: u32,
    /// Verification class name
    pub kind: String,
    /// Description
    pub description: String,
}

/// Response for `GET /sites/{id}`
#[derive(Debug, Serialize)]
pub struct CatalogData {
    /// Site summary
    pub site: SiteInfo,
    /// Defects in catalog order
    pub defects: Vec<DefectInfo>,
}

/// A ranked leaderboard row
#[derive(Debug, Serialize)]
pub struct RankedEntry {
    /// 1-based position
    pub rank: usize,
    /// Team name
    pub participant: String,
    /// Site the score was earned on
    pub site_id: u32,
    /// Best score
    pub score: u32,
    /// Maximum score
    pub max_score: u32,
    /// Elapsed seconds at submission
    pub elapsed_seconds: u64,
    /// Submission time
    pub timestamp: DateTime<Utc>,
}

impl RankedEntry {
    /// Row for `entry` at 1-based `rank`
    #[must_use]
    pub fn new(rank: usize, entry: LeaderboardEntry) -> Self {
        Self {
            rank,
            participant: entry.participant,
            site_id: entry.site_id,
            score: entry.score,
            max_score: entry.max_score,
            elapsed_seconds: entry.elapsed_seconds,
            timestamp: entry.timestamp,
        }
    }
}

/// Response for `GET /leaderboard`
#[derive(Debug, Serialize)]
pub struct LeaderboardData {
    /// Entries in ranking order
    pub entries: Vec<RankedEntry>,
}

/// Response for timer queries and controls
#[derive(Debug, Clone, Copy, Serialize)]
pub struct TimerData {
    /// Running or stopped
    pub status: TimerStatus,
    /// Start time, if ever started
    pub start_time: Option<DateTime<Utc>>,
    /// Configured duration
    pub duration_minutes: u32,
    /// Seconds left
    pub remaining_seconds: u64,
    /// Whether submissions are accepted
    pub active: bool,
}

/// Response for `POST /submissions`
#[derive(Debug, Serialize)]
pub struct SubmissionData {
    /// Team name
    pub team: String,
    /// Site scored
    pub site_id: u32,
    /// Score of this submission
    pub score: u32,
    /// Maximum achievable score for the site
    pub max_score: u32,
    /// Seconds since the event started
    pub elapsed_seconds: u64,
    /// Whether this submission changed the leaderboard
    pub leaderboard_updated: bool,
    /// Per-defect breakdown
    pub report: ScoreReport,
}

/// Team as exposed by the API; the password is never returned
#[derive(Debug, Serialize)]
pub struct TeamInfo {
    /// Team name
    pub name: String,
    /// Assigned site
    pub site_id: Option<u32>,
}

impl From<Team> for TeamInfo {
    fn from(team: Team) -> Self {
        Self {
            name: team.name,
            site_id: team.site_id,
        }
    }
}

/// Response for `GET /admin/teams`
#[derive(Debug, Serialize)]
pub struct TeamsData {
    /// Teams ordered by name
    pub teams: Vec<TeamInfo>,
}

/// Response for `POST /admin/teams/import`
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ImportData {
    /// Teams added
    pub added: usize,
    /// Parsed rows not added (duplicates)
    pub skipped: usize,
}

/// Response for simple admin mutations
#[derive(Debug, Serialize)]
pub struct MutationData {
    /// Human-readable outcome
    pub message: String,
}

impl MutationData {
    /// Wrap a message
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
