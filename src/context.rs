//! Application context
//!
//! Everything a request or command needs, built once from [`AppConfig`]
//! and passed explicitly.

use std::fmt;

use log::warn;

use crate::adapters::file::{JsonLeaderboardStore, JsonTeamRepository, JsonTimerStore};
use crate::config::AppConfig;
use crate::core::models::TimerState;
use crate::core::ports::{TeamRepository, TimerStore};
use crate::leaderboard::Leaderboard;
use crate::paths;
use crate::scoring::Scorer;

/// Loaded configuration plus the services built from it
pub struct AppContext {
    /// Configuration the context was built from
    pub config: AppConfig,
    /// Submission scorer
    pub scorer: Scorer,
    /// Best-score leaderboard
    pub leaderboard: Leaderboard,
    /// Event timer persistence
    pub timer: Box<dyn TimerStore>,
    /// Team roster
    pub teams: Box<dyn TeamRepository>,
}

impl fmt::Debug for AppContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppContext")
            .field("config", &self.config)
            .field("scorer", &self.scorer)
            .field("leaderboard", &self.leaderboard)
            .finish_non_exhaustive()
    }
}

impl AppContext {
    /// Assemble a context from explicit parts
    #[must_use]
    pub fn new(
        config: AppConfig,
        scorer: Scorer,
        leaderboard: Leaderboard,
        timer: Box<dyn TimerStore>,
        teams: Box<dyn TeamRepository>,
    ) -> Self {
        Self {
            config,
            scorer,
            leaderboard,
            timer,
            teams,
        }
    }

    /// Build the file-backed context described by `config`
    pub fn from_config(config: AppConfig) -> anyhow::Result<Self> {
        let data_dir = config.storage.data_dir.clone();
        let scorer = Scorer::from_config(&config)?;
        let leaderboard = Leaderboard::new(
            Box::new(JsonLeaderboardStore::new(paths::leaderboard_file(&data_dir))),
            config.scoring.max_score,
        );
        Ok(Self::new(
            config,
            scorer,
            leaderboard,
            Box::new(JsonTimerStore::new(paths::timer_file(&data_dir))),
            Box::new(JsonTeamRepository::new(paths::teams_file(&data_dir))),
        ))
    }

    /// Current timer state; unreadable state counts as stopped
    #[must_use]
    pub fn timer_state(&self) -> TimerState {
        self.timer.load().unwrap_or_else(|e| {
            warn!("Timer state unreadable, treating as stopped: {e:#}");
            TimerState::default()
        })
    }
}
