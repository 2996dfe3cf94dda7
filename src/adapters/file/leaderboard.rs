//! JSON-file leaderboard store

use std::path::{Path, PathBuf};

use crate::core::models::LeaderboardEntry;
use crate::core::ports::LeaderboardStore;

use super::{read_json, write_json};

/// Leaderboard persisted as a JSON array of entries
#[derive(Debug, Clone)]
pub struct JsonLeaderboardStore {
    path: PathBuf,
}

impl JsonLeaderboardStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the backing file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl LeaderboardStore for JsonLeaderboardStore {
    fn load(&self) -> anyhow::Result<Vec<LeaderboardEntry>> {
        read_json(&self.path)
    }

    fn save(&self, entries: &[LeaderboardEntry]) -> anyhow::Result<()> {
        write_json(&self.path, entries)
    }
}
