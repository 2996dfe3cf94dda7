//! Domain models
//!
//! - [`defect`] - A catalogued defect and its tier/category
//! - [`catalog`] - Per-site defect tables
//! - [`report`] - Verification results and score reports
//! - [`leaderboard`] - Best-score records
//! - [`timer`] - Event countdown
//! - [`team`] - Team roster entries

pub mod catalog;
pub mod defect;
pub mod leaderboard;
pub mod report;
pub mod team;
pub mod timer;

pub use catalog::{CatalogError, CatalogSet, SiteCatalog};
pub use defect::{Category, DefectEntry, Tier};
pub use leaderboard::{DEFAULT_MAX_SCORE, LeaderboardEntry};
pub use report::{CategoryTally, DefectOutcome, ScoreBasis, ScoreReport, VerificationResult};
pub use team::{Team, parse_roster_csv};
pub use timer::{TimerState, TimerStatus};
