//! CLI definitions and entry point

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use super::commands;
use bountyboard::config::AppConfig;
use bountyboard::context::AppContext;
use bountyboard::output::OutputMode;

/// bountyboard - Bug bounty event scoring
#[derive(Parser, Debug)]
#[command(
    name = "bountyboard",
    version,
    about = "Bug bounty event scoring",
    long_about = "Score fixed copies of deliberately broken websites.\n\n\
                  Each site ships with a catalog of injected defects. Teams fix\n\
                  them, submit their copy, and climb the leaderboard while the\n\
                  event timer runs."
)]
pub struct Cli {
    /// Path to bountyboard.toml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the HTTP API server
    #[cfg(feature = "server")]
    Serve {
        /// Override the configured port
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Score a submission directory
    Score {
        /// Directory holding the fixed site files
        dir: PathBuf,

        /// Site id the submission belongs to
        #[arg(short, long)]
        site: u32,
    },

    /// Show the ranked leaderboard
    Leaderboard,

    /// Control the event timer
    Timer {
        #[command(subcommand)]
        action: TimerAction,
    },

    /// Manage the team roster
    Team {
        #[command(subcommand)]
        action: TeamAction,
    },

    /// Edit recorded scores
    Scores {
        #[command(subcommand)]
        action: ScoresAction,
    },

    /// List sites, or the defects of one site
    Catalog {
        /// Site id to describe
        #[arg(short, long)]
        site: Option<u32>,
    },
}

/// Timer subcommands
#[derive(Subcommand, Debug, Clone, Copy)]
pub enum TimerAction {
    /// Start the countdown now
    Start {
        /// Event length in minutes
        #[arg(short, long)]
        minutes: u32,
    },
    /// Stop the countdown
    Stop,
    /// Stop and clear the countdown
    Reset,
    /// Show the countdown
    Status,
}

#[derive(Subcommand, Debug)]
pub enum TeamAction {
    /// Register a team
    Add {
        /// Team name
        name: String,
        /// Team password
        password: String,
        /// Assigned site
        #[arg(short, long)]
        site: Option<u32>,
    },
    /// Delete a team and its score
    Remove {
        /// Team name
        name: String,
    },
    /// Change a team's password
    Passwd {
        /// Team name
        name: String,
        /// New password
        password: String,
    },
    /// Assign a team to a site
    Assign {
        /// Team name
        name: String,
        /// Site id
        site: u32,
    },
    /// Import teams from a `name,password[,site]` CSV file
    Import {
        /// CSV file
        file: PathBuf,
    },
    /// List teams
    List,
}

#[derive(Subcommand, Debug)]
pub enum ScoresAction {
    /// Delete every leaderboard entry
    Reset,
    /// Overwrite a team's score and elapsed time
    Set {
        /// Team name
        team: String,
        /// New score
        score: u32,
        /// New elapsed time in seconds
        elapsed: u64,
    },
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    let mut config = AppConfig::load(cli.config.as_deref())?;
    #[cfg(feature = "server")]
    if let Command::Serve { port: Some(port) } = &cli.command {
        config.server.port = *port;
    }
    let ctx = AppContext::from_config(config)?;

    match cli.command {
        #[cfg(feature = "server")]
        Command::Serve { .. } => commands::serve(ctx),
        Command::Score { dir, site } => commands::score(&ctx, &dir, site, output_mode),
        Command::Leaderboard => commands::leaderboard(&ctx, output_mode),
        Command::Timer { action } => commands::timer(&ctx, action, output_mode),
        Command::Team { action } => commands::team(&ctx, action, output_mode),
        Command::Scores { action } => commands::scores(&ctx, action, output_mode),
        Command::Catalog { site } => commands::catalog(&ctx, site, output_mode),
    }
}
