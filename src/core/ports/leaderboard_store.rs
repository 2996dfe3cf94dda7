//! Leaderboard store port
//!
//! Defines the interface for persisting the full set of leaderboard entries.

use super::super::models::LeaderboardEntry;

/// Storage backend for leaderboard entries
///
/// The store is read and written as a whole; there are no partial writes.
/// Callers serialize read-modify-write cycles themselves.
pub trait LeaderboardStore: Send + Sync {
    /// Load every persisted entry
    ///
    /// A store that does not exist yet loads as empty.
    fn load(&self) -> anyhow::Result<Vec<LeaderboardEntry>>;

    /// Replace the persisted entries with `entries`
    fn save(&self, entries: &[LeaderboardEntry]) -> anyhow::Result<()>;

    /// Delete every entry
    fn clear(&self) -> anyhow::Result<()> {
        self.save(&[])
    }
}
