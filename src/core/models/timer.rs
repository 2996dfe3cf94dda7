//! Event countdown timer
//!
//! The timer gates whether submissions are accepted. Everything is computed
//! by subtraction from the stored start time; nothing is scheduled.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Whether the countdown is running
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerStatus {
    /// Counting down from `start_time`
    Running,
    /// Not accepting submissions
    #[default]
    Stopped,
}

impl std::fmt::Display for TimerStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Running => write!(f, "running"),
            Self::Stopped => write!(f, "stopped"),
        }
    }
}

/// Persisted timer state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TimerState {
    /// Running or stopped
    pub status: TimerStatus,

    /// When the countdown was started
    #[serde(default)]
    pub start_time: Option<DateTime<Utc>>,

    /// Length of the event in minutes
    #[serde(default, rename = "duration")]
    pub duration_minutes: u32,
}

impl TimerState {
    /// Start a countdown of `duration_minutes` at `now`
    #[must_use]
    pub const fn started(duration_minutes: u32, now: DateTime<Utc>) -> Self {
        Self {
            status: TimerStatus::Running,
            start_time: Some(now),
            duration_minutes,
        }
    }

    /// Stop the countdown, keeping start time and duration
    #[must_use]
    pub const fn stopped(self) -> Self {
        Self {
            status: TimerStatus::Stopped,
            ..self
        }
    }

    /// Total length of the event in seconds
    #[must_use]
    pub const fn duration_seconds(&self) -> i64 {
        self.duration_minutes as i64 * 60
    }

    /// Seconds left; zero when stopped or expired
    #[must_use]
    pub fn remaining_seconds(&self, now: DateTime<Utc>) -> u64 {
        match (self.status, self.start_time) {
            (TimerStatus::Running, Some(start)) => {
                let elapsed = (now - start).num_seconds().max(0);
                u64::try_from(self.duration_seconds() - elapsed).unwrap_or(0)
            },
            _ => 0,
        }
    }

    /// Whether submissions are accepted at `now`
    #[must_use]
    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        self.status == TimerStatus::Running && self.remaining_seconds(now) > 0
    }

    /// Seconds used so far, clamped to the event length
    #[must_use]
    pub fn elapsed_seconds(&self, now: DateTime<Utc>) -> u64 {
        let total = u64::try_from(self.duration_seconds()).unwrap_or(0);
        total.saturating_sub(self.remaining_seconds(now).min(total))
    }
}
