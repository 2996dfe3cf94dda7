//! Leaderboard service
//!
//! Owns the process-wide lock around every read-modify-write of the
//! leaderboard store. Reads tolerate a missing or corrupt store by treating
//! it as empty; write failures are logged and reported as "not updated".

use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

use log::{debug, error, info, warn};

use crate::core::models::LeaderboardEntry;
use crate::core::ports::LeaderboardStore;
use crate::core::services::{apply_score, rank};

/// Best score per participant, persisted through a [`LeaderboardStore`]
pub struct Leaderboard {
    store: Box<dyn LeaderboardStore>,
    max_score: u32,
    lock: Mutex<()>,
}

impl fmt::Debug for Leaderboard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Leaderboard")
            .field("max_score", &self.max_score)
            .finish_non_exhaustive()
    }
}

impl Leaderboard {
    /// Leaderboard over `store`, stamping new entries with `max_score`
    #[must_use]
    pub fn new(store: Box<dyn LeaderboardStore>, max_score: u32) -> Self {
        Self {
            store,
            max_score,
            lock: Mutex::new(()),
        }
    }

    fn guard(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn load(&self) -> Vec<LeaderboardEntry> {
        self.store.load().unwrap_or_else(|e| {
            warn!("Leaderboard store unreadable, treating as empty: {e:#}");
            Vec::new()
        })
    }

    /// Record a submission score
    ///
    /// Inserts a first entry or replaces an existing one when `score` is
    /// strictly greater. Returns whether the persisted leaderboard changed.
    pub fn record_score(
        &self,
        participant: &str,
        site_id: u32,
        score: u32,
        elapsed_seconds: u64,
    ) -> bool {
        let _guard = self.guard();
        let mut entries = self.load();
        let candidate =
            LeaderboardEntry::new(participant, site_id, score, elapsed_seconds, self.max_score);

        if !apply_score(&mut entries, candidate) {
            debug!("Keeping existing best score for {participant}");
            return false;
        }

        match self.store.save(&entries) {
            Ok(()) => {
                info!("Leaderboard updated: {participant} scored {score} on site {site_id}");
                true
            },
            Err(e) => {
                error!("Failed to persist leaderboard for {participant}: {e:#}");
                false
            },
        }
    }

    /// Entries in ranking order
    #[must_use]
    pub fn rank(&self) -> Vec<LeaderboardEntry> {
        let _guard = self.guard();
        rank(self.load())
    }

    /// Delete every entry
    pub fn reset(&self) -> anyhow::Result<()> {
        let _guard = self.guard();
        self.store.clear()?;
        info!("Leaderboard cleared");
        Ok(())
    }

    /// Overwrite a participant's score and elapsed time unconditionally
    ///
    /// Returns `false` when the participant has no entry.
    pub fn set_entry(
        &self,
        participant: &str,
        score: u32,
        elapsed_seconds: u64,
    ) -> anyhow::Result<bool> {
        let _guard = self.guard();
        let mut entries = self.load();
        let Some(entry) = entries.iter_mut().find(|e| e.participant == participant) else {
            return Ok(false);
        };
        entry.score = score;
        entry.elapsed_seconds = elapsed_seconds;
        self.store.save(&entries)?;
        info!("Leaderboard entry for {participant} set to {score} ({elapsed_seconds}s)");
        Ok(true)
    }

    /// Remove a participant's entry; returns whether one existed
    pub fn remove(&self, participant: &str) -> anyhow::Result<bool> {
        let _guard = self.guard();
        let mut entries = self.load();
        let before = entries.len();
        entries.retain(|e| e.participant != participant);
        if entries.len() == before {
            return Ok(false);
        }
        self.store.save(&entries)?;
        Ok(true)
    }
}
