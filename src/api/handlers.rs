//! Pure API handlers
//!
//! These handlers contain business logic and are HTTP-agnostic.
//! They take the application context plus typed input and return
//! `Result<T, ApiError>`.

use chrono::{DateTime, Utc};
use log::{info, warn};

use crate::adapters::file::store_submission;
use crate::context::AppContext;
use crate::core::models::{Team, TimerState, parse_roster_csv};
use crate::paths;

use super::error::ApiError;
use super::types::{
    AddTeamRequest, CatalogData, DefectInfo, ImportData, LeaderboardData, MutationData,
    RankedEntry, SetScoreRequest, SiteInfo, SitesData, StartTimerRequest, SubmissionData,
    SubmitRequest, TeamInfo, TeamsData, TimerData, UpdateTeamRequest,
};

fn internal(e: &anyhow::Error) -> ApiError {
    ApiError::internal(format!("{e:#}"))
}

// =============================================================================
// SITES
// =============================================================================

fn site_info(ctx: &AppContext, id: u32) -> Option<SiteInfo> {
    let site = ctx.scorer.site(id)?;
    let catalog = ctx.scorer.catalogs().get(id).ok();
    Some(SiteInfo {
        id: site.id,
        name: site.name.clone(),
        markup_file: site.markup_file.clone(),
        stylesheet_file: site.stylesheet_file.clone(),
        has_catalog: catalog.is_some(),
        total_defects: catalog.map_or(0, |c| c.total_defects()),
        max_score: catalog.map_or(0, |c| c.max_score()),
    })
}

/// List configured sites with their catalog sizes
pub fn list_sites(ctx: &AppContext) -> Result<SitesData, ApiError> {
    let mut sites: Vec<SiteInfo> =
        ctx.scorer.sites().iter().filter_map(|s| site_info(ctx, s.id)).collect();
    sites.sort_by_key(|s| s.id);
    Ok(SitesData { sites })
}

/// Describe one site's catalog
pub fn get_site_catalog(ctx: &AppContext, id: u32) -> Result<CatalogData, ApiError> {
    let site = site_info(ctx, id).ok_or_else(|| ApiError::not_found(format!("Site {id} not found")))?;
    let defects = ctx
        .scorer
        .catalogs()
        .get(id)
        .map(|catalog| {
            catalog
                .defects()
                .iter()
                .map(|d| DefectInfo {
                    id: d.id().to_string(),
                    category: d.category(),
                    tier: d.tier(),
                    points: d.points(),
                    kind: d.kind().to_string(),
                    description: d.description().to_string(),
                })
                .collect()
        })
        .unwrap_or_default();
    Ok(CatalogData { site, defects })
}

// =============================================================================
// LEADERBOARD
// =============================================================================

/// Ranked leaderboard
pub fn get_leaderboard(ctx: &AppContext) -> Result<LeaderboardData, ApiError> {
    let entries = ctx
        .leaderboard
        .rank()
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry::new(i + 1, entry))
        .collect();
    Ok(LeaderboardData { entries })
}

// =============================================================================
// TIMER
// =============================================================================

fn timer_data(state: &TimerState, now: DateTime<Utc>) -> TimerData {
    TimerData {
        status: state.status,
        start_time: state.start_time,
        duration_minutes: state.duration_minutes,
        remaining_seconds: state.remaining_seconds(now),
        active: state.is_active(now),
    }
}

fn save_timer(ctx: &AppContext, state: &TimerState) -> Result<TimerData, ApiError> {
    ctx.timer.save(state).map_err(|e| internal(&e))?;
    Ok(timer_data(state, Utc::now()))
}

/// Current timer status
pub fn get_timer(ctx: &AppContext) -> Result<TimerData, ApiError> {
    Ok(timer_data(&ctx.timer_state(), Utc::now()))
}

/// Start the countdown now
pub fn start_timer(ctx: &AppContext, req: &StartTimerRequest) -> Result<TimerData, ApiError> {
    if req.duration_minutes == 0 {
        return Err(ApiError::bad_request("Duration must be at least one minute"));
    }
    info!("Timer started for {} minutes", req.duration_minutes);
    save_timer(ctx, &TimerState::started(req.duration_minutes, Utc::now()))
}

/// Stop the countdown, keeping start time and duration
pub fn stop_timer(ctx: &AppContext) -> Result<TimerData, ApiError> {
    info!("Timer stopped");
    save_timer(ctx, &ctx.timer_state().stopped())
}

/// Stop the countdown and clear it
pub fn reset_timer(ctx: &AppContext) -> Result<TimerData, ApiError> {
    info!("Timer reset");
    save_timer(ctx, &TimerState::default())
}

// =============================================================================
// SUBMISSIONS
// =============================================================================

/// Accept, score and record a team's submission
pub fn submit(ctx: &AppContext, req: &SubmitRequest) -> Result<SubmissionData, ApiError> {
    let team = ctx
        .teams
        .authenticate(&req.team, &req.password)
        .map_err(|e| internal(&e))?
        .ok_or_else(|| ApiError::unauthorized("Invalid team name or password"))?;

    let now = Utc::now();
    let timer = ctx.timer_state();
    if !timer.is_active(now) {
        return Err(ApiError::forbidden("Event is closed"));
    }

    let site_id = team
        .site_id
        .ok_or_else(|| ApiError::bad_request(format!("Team '{}' has no assigned site", team.name)))?;
    let site = ctx
        .scorer
        .site(site_id)
        .ok_or_else(|| ApiError::bad_request(format!("Unknown site {site_id}")))?;

    let mut files = Vec::new();
    if let Some(markup) = &req.markup {
        files.push((site.markup_file.as_str(), markup.as_str()));
    }
    if let Some(stylesheet) = &req.stylesheet {
        files.push((site.stylesheet_file.as_str(), stylesheet.as_str()));
    }
    if files.is_empty() {
        return Err(ApiError::bad_request("Submission contains no files"));
    }

    let team_dir = paths::submission_dir(&ctx.config.storage.data_dir, &team.slug());
    let dir = store_submission(&team_dir, &files).map_err(|e| internal(&e))?;

    let report = ctx.scorer.score_detailed(&dir, site_id);
    let elapsed_seconds = timer.elapsed_seconds(now);
    let leaderboard_updated =
        ctx.leaderboard.record_score(&team.name, site_id, report.total_score, elapsed_seconds);
    info!(
        "Submission from {}: {} points after {elapsed_seconds}s",
        team.name, report.total_score
    );

    Ok(SubmissionData {
        team: team.name,
        site_id,
        score: report.total_score,
        max_score: ctx.config.scoring.max_score,
        elapsed_seconds,
        leaderboard_updated,
        report,
    })
}

// =============================================================================
// ADMIN
// =============================================================================

/// Check the admin token
pub fn require_admin(ctx: &AppContext, token: Option<&str>) -> Result<(), ApiError> {
    match token {
        None => Err(ApiError::unauthorized("Admin token required")),
        Some(token) if token == ctx.config.admin.password => Ok(()),
        Some(_) => {
            warn!("Rejected admin request with a wrong token");
            Err(ApiError::forbidden("Invalid admin token"))
        },
    }
}

/// Delete every leaderboard entry
pub fn reset_scores(ctx: &AppContext) -> Result<MutationData, ApiError> {
    ctx.leaderboard.reset().map_err(|e| internal(&e))?;
    Ok(MutationData::new("Scores cleared"))
}

/// Overwrite a team's leaderboard score and elapsed time
pub fn set_score(ctx: &AppContext, team: &str, req: &SetScoreRequest) -> Result<MutationData, ApiError> {
    let found = ctx
        .leaderboard
        .set_entry(team, req.score, req.elapsed_seconds)
        .map_err(|e| internal(&e))?;
    if !found {
        return Err(ApiError::not_found(format!("No leaderboard entry for '{team}'")));
    }
    Ok(MutationData::new(format!("Score for '{team}' updated")))
}

fn check_site(ctx: &AppContext, site_id: Option<u32>) -> Result<(), ApiError> {
    match site_id {
        Some(id) if ctx.scorer.site(id).is_none() => {
            Err(ApiError::bad_request(format!("Unknown site {id}")))
        },
        _ => Ok(()),
    }
}

/// List the roster
pub fn list_teams(ctx: &AppContext) -> Result<TeamsData, ApiError> {
    let teams = ctx.teams.list().map_err(|e| internal(&e))?;
    Ok(TeamsData {
        teams: teams.into_iter().map(TeamInfo::from).collect(),
    })
}

/// Add a team
pub fn add_team(ctx: &AppContext, req: &AddTeamRequest) -> Result<TeamInfo, ApiError> {
    let name = req.name.trim();
    let password = req.password.trim();
    if name.is_empty() || password.is_empty() {
        return Err(ApiError::bad_request("Team name and password cannot be empty"));
    }
    check_site(ctx, req.site_id)?;

    if ctx.teams.get(name).map_err(|e| internal(&e))?.is_some() {
        return Err(ApiError::conflict(format!("Team '{name}' already exists")));
    }
    let team = Team::new(name, password).with_site(req.site_id);
    ctx.teams.add(team.clone()).map_err(|e| internal(&e))?;
    info!("Team '{name}' added");
    Ok(team.into())
}

/// Change a team's password and/or site assignment
pub fn update_team(ctx: &AppContext, name: &str, req: &UpdateTeamRequest) -> Result<TeamInfo, ApiError> {
    if req.password.as_deref().is_some_and(|p| p.trim().is_empty()) {
        return Err(ApiError::bad_request("Password cannot be empty"));
    }
    check_site(ctx, req.site_id)?;

    let password = req.password.as_deref().map(str::trim);
    let updated = ctx
        .teams
        .update(name, &|team| {
            if let Some(password) = password {
                team.password = password.to_string();
            }
            if req.site_id.is_some() {
                team.site_id = req.site_id;
            }
        })
        .map_err(|e| internal(&e))?
        .ok_or_else(|| ApiError::not_found(format!("Team '{name}' not found")))?;
    info!("Team '{name}' updated");
    Ok(updated.into())
}

/// Delete a team and its leaderboard entry
pub fn delete_team(ctx: &AppContext, name: &str) -> Result<MutationData, ApiError> {
    if !ctx.teams.remove(name).map_err(|e| internal(&e))? {
        return Err(ApiError::not_found(format!("Team '{name}' not found")));
    }
    ctx.leaderboard.remove(name).map_err(|e| internal(&e))?;
    info!("Team '{name}' deleted");
    Ok(MutationData::new(format!("Team '{name}' deleted")))
}

/// Import `name,password[,site]` rows; existing names are skipped
pub fn import_teams(ctx: &AppContext, csv: &str) -> Result<ImportData, ApiError> {
    let teams: Vec<Team> = parse_roster_csv(csv)
        .into_iter()
        .map(|team| {
            if team.site_id.is_some_and(|id| ctx.scorer.site(id).is_none()) {
                warn!("Ignoring unknown site for imported team '{}'", team.name);
                team.with_site(None)
            } else {
                team
            }
        })
        .collect();
    let parsed = teams.len();
    let added = ctx.teams.import(teams).map_err(|e| internal(&e))?;
    info!("{added} team(s) imported");
    Ok(ImportData {
        added,
        skipped: parsed - added,
    })
}
