//! Score administration - reset and overwrite

use bountyboard::api::{self, SetScoreRequest};
use bountyboard::context::AppContext;
use bountyboard::output::{OutputMode, Render};

use crate::cli::app::ScoresAction;

/// Handle scores subcommands
pub fn scores(ctx: &AppContext, action: ScoresAction, mode: OutputMode) -> anyhow::Result<()> {
    let result = match action {
        ScoresAction::Reset => api::reset_scores(ctx)?,
        ScoresAction::Set {
            team,
            score,
            elapsed,
        } => api::set_score(
            ctx,
            &team,
            &SetScoreRequest {
                score,
                elapsed_seconds: elapsed,
            },
        )?,
    };
    result.render(mode);
    Ok(())
}
