//! JSON file adapters
//!
//! Persisted state lives in the data directory as pretty-printed JSON:
//! `leaderboard.json`, `timer.json` and `teams.json`. Submissions are kept
//! as plain files, one directory per upload.

mod leaderboard;
mod submission;
mod teams;
mod timer;

pub use leaderboard::JsonLeaderboardStore;
pub use submission::{read_corpus, store_submission};
pub use teams::JsonTeamRepository;
pub use timer::JsonTimerStore;

use std::fs;
use std::path::Path;

use serde::{Serialize, de::DeserializeOwned};

/// Read a JSON file, returning `T::default()` when it does not exist
fn read_json<T: DeserializeOwned + Default>(path: &Path) -> anyhow::Result<T> {
    if !path.exists() {
        return Ok(T::default());
    }
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Write a JSON file through a temporary sibling and a rename
fn write_json<T: Serialize + ?Sized>(path: &Path, value: &T) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = serde_json::to_string_pretty(value)?;
    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, content)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
