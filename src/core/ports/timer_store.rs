//! Timer store port

use super::super::models::TimerState;

/// Persistence for the event countdown
pub trait TimerStore: Send + Sync {
    /// Load the current state; a missing store loads as the default
    fn load(&self) -> anyhow::Result<TimerState>;

    /// Persist a new state
    fn save(&self, state: &TimerState) -> anyhow::Result<()>;
}
