//! Port traits for persisted event state
//!
//! The leaderboard, the timer and the roster are reached only through these
//! traits. The JSON file implementations live in [`crate::adapters::file`];
//! unit tests substitute in-memory ones.

mod leaderboard_store;
mod team_repo;
mod timer_store;

pub use leaderboard_store::LeaderboardStore;
pub use team_repo::TeamRepository;
pub use timer_store::TimerStore;
