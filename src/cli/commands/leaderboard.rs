//! Print the ranked leaderboard

use bountyboard::api;
use bountyboard::context::AppContext;
use bountyboard::output::{OutputMode, Render};

/// Show the leaderboard
pub fn leaderboard(ctx: &AppContext, mode: OutputMode) -> anyhow::Result<()> {
    api::get_leaderboard(ctx)?.render(mode);
    Ok(())
}
