//! Centralized path definitions for bountyboard
//!
//! ## Storage Layout
//!
//! ```text
//! data/                        # storage.data_dir
//! ├── leaderboard.json         # Best score per team
//! ├── timer.json               # Event countdown state
//! ├── teams.json               # Roster
//! └── uploads/
//!     └── <team-slug>/
//!         └── <timestamp>-<seq>/   # One directory per submission
//!             ├── index.html
//!             └── checkout.css
//! ```
//!
//! Configuration is looked up at `./bountyboard.toml`, then
//! `<config dir>/bountyboard/bountyboard.toml`.

use std::path::{Path, PathBuf};

/// Configuration filename
pub const CONFIG_FILE: &str = "bountyboard.toml";

/// Application directory name under the user config dir
const APP_DIR: &str = "bountyboard";

/// Leaderboard filename
const LEADERBOARD_FILE: &str = "leaderboard.json";

/// Timer state filename
const TIMER_FILE: &str = "timer.json";

/// Roster filename
const TEAMS_FILE: &str = "teams.json";

/// Submissions subdirectory
const UPLOADS_DIR: &str = "uploads";

/// `./bountyboard.toml`
#[must_use]
pub fn local_config() -> PathBuf {
    PathBuf::from(CONFIG_FILE)
}

/// `<config dir>/bountyboard/bountyboard.toml`, if the platform has one
#[must_use]
pub fn user_config() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(CONFIG_FILE))
}

/// `<data_dir>/leaderboard.json`
#[must_use]
pub fn leaderboard_file(data_dir: &Path) -> PathBuf {
    data_dir.join(LEADERBOARD_FILE)
}

/// `<data_dir>/timer.json`
#[must_use]
pub fn timer_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TIMER_FILE)
}

/// `<data_dir>/teams.json`
#[must_use]
pub fn teams_file(data_dir: &Path) -> PathBuf {
    data_dir.join(TEAMS_FILE)
}

/// `<data_dir>/uploads/`
#[must_use]
pub fn uploads_dir(data_dir: &Path) -> PathBuf {
    data_dir.join(UPLOADS_DIR)
}

/// `<data_dir>/uploads/<slug>/`, the parent of a team's submissions
///
/// The slug comes from [`crate::core::models::Team::slug`] so it never
/// contains path separators. Distinct names may share a slug; each
/// submission still lands in its own subdirectory.
#[must_use]
pub fn submission_dir(data_dir: &Path, slug: &str) -> PathBuf {
    uploads_dir(data_dir).join(slug)
}
