//! JSON-file timer store
//!
//! Keeps the `{"status", "start_time", "duration"}` shape of the event
//! status file.

use std::path::PathBuf;

use crate::core::models::TimerState;
use crate::core::ports::TimerStore;

use super::{read_json, write_json};

/// Timer state persisted as a small JSON object
#[derive(Debug, Clone)]
pub struct JsonTimerStore {
    path: PathBuf,
}

impl JsonTimerStore {
    /// Store backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl TimerStore for JsonTimerStore {
    fn load(&self) -> anyhow::Result<TimerState> {
        read_json(&self.path)
    }

    fn save(&self, state: &TimerState) -> anyhow::Result<()> {
        write_json(&self.path, state)
    }
}
