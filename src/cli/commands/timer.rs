//! Timer control command

use bountyboard::api::{self, StartTimerRequest};
use bountyboard::context::AppContext;
use bountyboard::output::{OutputMode, Render};

use crate::cli::app::TimerAction;

/// Handle timer subcommands
pub fn timer(ctx: &AppContext, action: TimerAction, mode: OutputMode) -> anyhow::Result<()> {
    let data = match action {
        TimerAction::Start { minutes } => api::start_timer(
            ctx,
            &StartTimerRequest {
                duration_minutes: minutes,
            },
        )?,
        TimerAction::Stop => api::stop_timer(ctx)?,
        TimerAction::Reset => api::reset_timer(ctx)?,
        TimerAction::Status => api::get_timer(ctx)?,
    };
    data.render(mode);
    Ok(())
}
