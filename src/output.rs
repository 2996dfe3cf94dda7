//! Output formatting for human and JSON modes
//!
//! Every command result implements [`Render`] so it can be shown either as
//! human-readable text or machine-parseable JSON.

use std::fmt::Write as _;

use colored::Colorize;
use serde::Serialize;

use crate::api::{
    CatalogData, ImportData, LeaderboardData, MutationData, SitesData, TeamInfo, TeamsData,
    TimerData,
};
use crate::core::models::{ScoreBasis, ScoreReport, TimerStatus};

/// Output mode for the CLI
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputMode {
    /// Human-readable output (default)
    #[default]
    Human,
    /// JSON output (machine-readable)
    Json,
}

/// A command result that can be printed in either mode
pub trait Render: Serialize {
    /// Human-readable text
    fn to_human(&self) -> String;

    /// Pretty-printed JSON
    fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).unwrap_or_default()
    }

    /// Print the result based on output mode
    fn render(&self, mode: OutputMode) {
        match mode {
            OutputMode::Human => println!("{}", self.to_human()),
            OutputMode::Json => println!("{}", self.to_json()),
        }
    }
}

/// `mm:ss` for an elapsed or remaining time
#[must_use]
pub fn format_duration(seconds: u64) -> String {
    format!("{:02}:{:02}", seconds / 60, seconds % 60)
}

/// Result of scoring one submission directory
#[derive(Debug, Serialize)]
pub struct ScoreOutput {
    /// Site scored against
    pub site_id: u32,
    /// Site display name, if the site is configured
    pub site_name: Option<String>,
    /// Full report
    #[serde(flatten)]
    pub report: ScoreReport,
}

impl Render for ScoreOutput {
    fn to_human(&self) -> String {
        let mut out = String::new();
        let name = self.site_name.as_deref().unwrap_or("unknown site");
        let _ = writeln!(out, "Site {} ({name})", self.site_id);

        match self.report.basis {
            ScoreBasis::UnknownSite => {
                let _ = writeln!(out, "{}", "Unknown site, score 0".red());
            },
            ScoreBasis::MissingSubmission => {
                let _ = writeln!(out, "{}", "Submission directory not found, score 0".red());
            },
            ScoreBasis::Presence => {
                let _ = writeln!(out, "No catalog for this site; scored by file presence");
            },
            ScoreBasis::Catalog => {
                for defect in &self.report.defects {
                    let mark = if defect.fixed { "✓".green() } else { "✗".red() };
                    let _ = writeln!(
                        out,
                        "  {mark} {:<28} {:<6} {:<6} {:>3}",
                        defect.id, defect.category, defect.tier, defect.points
                    );
                }
                for (category, tally) in &self.report.per_category {
                    let _ = writeln!(
                        out,
                        "  {category}: {}/{} fixed, {} points",
                        tally.fixed, tally.total, tally.points
                    );
                }
            },
        }

        let _ = write!(
            out,
            "{} {} ({}/{} defects fixed)",
            "Score:".bold(),
            self.report.total_score,
            self.report.fixed_count,
            self.report.total_count
        );
        out
    }
}

impl Render for LeaderboardData {
    fn to_human(&self) -> String {
        if self.entries.is_empty() {
            return "No scores yet.".to_string();
        }
        let mut out = format!("{:>4}  {:<24} {:>4} {:>9} {:>7}\n", "#", "Team", "Site", "Score", "Time");
        for e in &self.entries {
            let line = format!(
                "{:>4}  {:<24} {:>4} {:>4}/{:<4} {:>7}",
                e.rank,
                e.participant,
                e.site_id,
                e.score,
                e.max_score,
                format_duration(e.elapsed_seconds)
            );
            if e.rank == 1 {
                let _ = writeln!(out, "{}", line.yellow().bold());
            } else {
                let _ = writeln!(out, "{line}");
            }
        }
        out.trim_end().to_string()
    }
}

impl Render for TimerData {
    fn to_human(&self) -> String {
        let status = match self.status {
            TimerStatus::Running if self.active => "running".green(),
            TimerStatus::Running => "expired".yellow(),
            TimerStatus::Stopped => "stopped".red(),
        };
        format!(
            "Timer {status}: {} remaining of {} minute(s)",
            format_duration(self.remaining_seconds),
            self.duration_minutes
        )
    }
}

impl Render for SitesData {
    fn to_human(&self) -> String {
        let mut out = String::new();
        for s in &self.sites {
            let catalog = if s.has_catalog {
                format!("{} defects, max {}", s.total_defects, s.max_score)
            } else {
                "no catalog".dimmed().to_string()
            };
            let _ = writeln!(
                out,
                "  [{}] {:<24} {} + {}  ({catalog})",
                s.id, s.name, s.markup_file, s.stylesheet_file
            );
        }
        out.trim_end().to_string()
    }
}

impl Render for CatalogData {
    fn to_human(&self) -> String {
        let mut out = format!(
            "Site {} ({}): {} defects, max {}\n",
            self.site.id, self.site.name, self.site.total_defects, self.site.max_score
        );
        for d in &self.defects {
            let _ = writeln!(
                out,
                "  {:<28} {:<6} {:<6} {:>3}  {:<17} {}",
                d.id, d.category, d.tier, d.points, d.kind, d.description
            );
        }
        out.trim_end().to_string()
    }
}

impl Render for TeamsData {
    fn to_human(&self) -> String {
        if self.teams.is_empty() {
            return "No teams registered.".to_string();
        }
        self.teams.iter().map(TeamInfo::to_human).collect::<Vec<_>>().join("\n")
    }
}

impl Render for TeamInfo {
    fn to_human(&self) -> String {
        match self.site_id {
            Some(site) => format!("  {} (site {site})", self.name),
            None => format!("  {} {}", self.name, "(no site)".dimmed()),
        }
    }
}

impl Render for ImportData {
    fn to_human(&self) -> String {
        format!("{} team(s) imported, {} skipped", self.added, self.skipped)
    }
}

impl Render for MutationData {
    fn to_human(&self) -> String {
        self.message.clone()
    }
}
