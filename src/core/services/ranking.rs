//! Leaderboard rules - best-score replacement and ordering
//!
//! Pure functions over entry lists; persistence and locking live in
//! [`crate::leaderboard::Leaderboard`].

use std::cmp::Ordering;

use crate::core::models::LeaderboardEntry;

/// Merge a candidate entry into the list
///
/// Entries are keyed by participant alone. An existing entry is replaced only
/// when the candidate's score is strictly greater. Returns whether the list
/// changed.
pub fn apply_score(entries: &mut Vec<LeaderboardEntry>, candidate: LeaderboardEntry) -> bool {
    match entries.iter_mut().find(|e| e.participant == candidate.participant) {
        Some(existing) if candidate.score > existing.score => {
            *existing = candidate;
            true
        },
        Some(_) => false,
        None => {
            entries.push(candidate);
            true
        },
    }
}

/// Ranking order: score descending, then elapsed time ascending
///
/// Remaining ties fall back to the earlier timestamp, then the participant
/// name, so the order is total.
#[must_use]
pub fn compare_entries(a: &LeaderboardEntry, b: &LeaderboardEntry) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.elapsed_seconds.cmp(&b.elapsed_seconds))
        .then_with(|| a.timestamp.cmp(&b.timestamp))
        .then_with(|| a.participant.cmp(&b.participant))
}

/// Sort entries into ranking order
#[must_use]
pub fn rank(mut entries: Vec<LeaderboardEntry>) -> Vec<LeaderboardEntry> {
    entries.sort_by(compare_entries);
    entries
}
