//! HTTP-agnostic API layer
//!
//! This module provides typed request/response structures and pure business logic
//! handlers that can be used by any HTTP server implementation (`tiny_http`, axum, etc.)
//! or directly by the CLI.
//!
//! ## Design
//!
//! - **Handlers are pure functions**: Take the context and typed input, return `Result<T, ApiError>`
//! - **Types are framework-agnostic**: No HTTP types leak into this module
//! - **Errors carry HTTP semantics**: `ApiError` knows its status code for translation

mod error;
mod handlers;
mod types;

pub use error::{ApiError, ErrorCode};
pub use handlers::{
    add_team, delete_team, get_leaderboard, get_site_catalog, get_timer, import_teams,
    list_sites, list_teams, require_admin, reset_scores, reset_timer, set_score, start_timer,
    stop_timer, submit, update_team,
};
pub use types::{
    AddTeamRequest, ApiResponse, CatalogData, DefectInfo, ImportData, LeaderboardData,
    MutationData, RankedEntry, SetScoreRequest, SiteInfo, SitesData, StartTimerRequest,
    SubmissionData, SubmitRequest, TeamInfo, TeamsData, TimerData, UpdateTeamRequest,
};
