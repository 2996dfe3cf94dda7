//! Score a submission directory offline

use std::path::Path;

use bountyboard::context::AppContext;
use bountyboard::output::{OutputMode, Render, ScoreOutput};

/// Score `dir` against the catalog of `site_id` and print the report
pub fn score(ctx: &AppContext, dir: &Path, site_id: u32, mode: OutputMode) -> anyhow::Result<()> {
    let report = ctx.scorer.score_detailed(dir, site_id);
    ScoreOutput {
        site_id,
        site_name: ctx.scorer.site(site_id).map(|s| s.name.clone()),
        report,
    }
    .render(mode);
    Ok(())
}
