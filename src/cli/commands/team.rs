//! Team roster management - add, remove, passwd, assign, import, list

use std::fs;

use anyhow::Context;

use bountyboard::api::{self, AddTeamRequest, UpdateTeamRequest};
use bountyboard::context::AppContext;
use bountyboard::output::{OutputMode, Render};

use crate::cli::app::TeamAction;

/// Handle team subcommands
pub fn team(ctx: &AppContext, action: TeamAction, mode: OutputMode) -> anyhow::Result<()> {
    match action {
        TeamAction::Add {
            name,
            password,
            site,
        } => {
            let team = api::add_team(
                ctx,
                &AddTeamRequest {
                    name,
                    password,
                    site_id: site,
                },
            )?;
            team.render(mode);
        },
        TeamAction::Remove { name } => api::delete_team(ctx, &name)?.render(mode),
        TeamAction::Passwd { name, password } => {
            let req = UpdateTeamRequest {
                password: Some(password),
                site_id: None,
            };
            api::update_team(ctx, &name, &req)?.render(mode);
        },
        TeamAction::Assign { name, site } => {
            let req = UpdateTeamRequest {
                password: None,
                site_id: Some(site),
            };
            api::update_team(ctx, &name, &req)?.render(mode);
        },
        TeamAction::Import { file } => {
            let content = fs::read_to_string(&file)
                .with_context(|| format!("Failed to read {}", file.display()))?;
            api::import_teams(ctx, &content)?.render(mode);
        },
        TeamAction::List => api::list_teams(ctx)?.render(mode),
    }
    Ok(())
}
