//! Command implementations

mod catalog;
mod leaderboard;
mod score;
mod scores;
#[cfg(feature = "server")]
mod serve;
mod team;
mod timer;

pub use catalog::catalog;
pub use leaderboard::leaderboard;
pub use score::score;
pub use scores::scores;
#[cfg(feature = "server")]
pub use serve::serve;
pub use team::team;
pub use timer::timer;
