//! Application configuration
//!
//! Loaded once at startup from `bountyboard.toml` and passed explicitly to
//! everything that needs it. Every section is optional:
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! workers = 4
//!
//! [storage]
//! data_dir = "data"
//!
//! [scoring]
//! max_score = 900
//! markup_presence_points = 200
//! stylesheet_presence_points = 100
//! catalog_dir = "catalogs"
//!
//! [admin]
//! password = "admin123"
//!
//! [[sites]]
//! id = 1
//! name = "E-commerce Site"
//! markup_file = "index.html"
//! stylesheet_file = "checkout.css"
//! ```

use std::collections::BTreeSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::models::DEFAULT_MAX_SCORE;
use crate::core::services::PresencePoints;
use crate::paths;

/// Environment variable overriding `server.port`
pub const PORT_ENV: &str = "BOUNTYBOARD_PORT";

/// Environment variable overriding `admin.password`
pub const ADMIN_PASSWORD_ENV: &str = "BOUNTYBOARD_ADMIN_PASSWORD";

/// Errors raised while loading configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The config file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        /// File that failed
        path: PathBuf,
        /// Underlying I/O error
        source: io::Error,
    },

    /// The config file is not valid TOML for this schema
    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        /// File that failed
        path: PathBuf,
        /// Underlying TOML error
        source: toml::de::Error,
    },

    /// An environment override could not be parsed
    #[error("Invalid value for {key}: '{value}'")]
    InvalidEnv {
        /// Variable name
        key: &'static str,
        /// Offending value
        value: String,
    },

    /// Two `[[sites]]` entries share an id
    #[error("Duplicate site id {0} in configuration")]
    DuplicateSite(u32),
}

/// Top-level configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP listener
    pub server: ServerConfig,
    /// Persisted state location
    pub storage: StorageConfig,
    /// Scoring knobs
    pub scoring: ScoringConfig,
    /// Admin credentials
    pub admin: AdminConfig,
    /// Known sites and their designated files
    pub sites: Vec<SiteConfig>,
}

/// `[server]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address
    pub host: String,
    /// Bind port
    pub port: u16,
    /// Request worker threads
    pub workers: usize,
}

/// `[storage]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Directory holding leaderboard, timer, roster and uploads
    pub data_dir: PathBuf,
}

/// `[scoring]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Maximum score recorded on leaderboard entries
    pub max_score: u32,
    /// Points for a present markup file when a site has no catalog
    pub markup_presence_points: u32,
    /// Points for a present stylesheet when a site has no catalog
    pub stylesheet_presence_points: u32,
    /// Directory of catalog TOML files replacing the built-in ones
    #[serde(skip_serializing_if = "Option::is_none")]
    pub catalog_dir: Option<PathBuf>,
}

/// `[admin]` section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminConfig {
    /// Value expected in the `X-Admin-Token` header
    pub password: String,
}

/// A known site and the fixed names of its designated files
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    /// Site id
    pub id: u32,
    /// Display name
    pub name: String,
    /// Markup file, relative to the submission root
    pub markup_file: String,
    /// Stylesheet file, relative to the submission root
    pub stylesheet_file: String,
}

impl SiteConfig {
    /// Create a site entry
    #[must_use]
    pub fn new(id: u32, name: &str, markup_file: &str, stylesheet_file: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            markup_file: markup_file.to_string(),
            stylesheet_file: stylesheet_file.to_string(),
        }
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            workers: 4,
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
        }
    }
}

impl Default for ScoringConfig {
    fn default() -> Self {
        let presence = PresencePoints::default();
        Self {
            max_score: DEFAULT_MAX_SCORE,
            markup_presence_points: presence.markup,
            stylesheet_presence_points: presence.stylesheet,
            catalog_dir: None,
        }
    }
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            password: "admin123".to_string(),
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            storage: StorageConfig::default(),
            scoring: ScoringConfig::default(),
            admin: AdminConfig::default(),
            sites: default_sites(),
        }
    }
}

/// The five event sites
#[must_use]
pub fn default_sites() -> Vec<SiteConfig> {
    vec![
        SiteConfig::new(1, "E-commerce Site", "index.html", "checkout.css"),
        SiteConfig::new(2, "Social Media Platform", "profile.html", "social.css"),
        SiteConfig::new(3, "Banking Portal", "login.html", "banking.css"),
        SiteConfig::new(4, "News Website", "article.html", "layout.css"),
        SiteConfig::new(5, "Online Learning", "course.html", "learning.css"),
    ]
}

impl AppConfig {
    /// Load configuration for this process
    ///
    /// An explicit path must exist. Otherwise the first of
    /// `./bountyboard.toml` and the user config file that exists is used,
    /// falling back to defaults. Environment overrides apply last.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let mut config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::discover() {
                Some(path) => Self::from_file(&path)?,
                None => {
                    info!("No {} found, using defaults", paths::CONFIG_FILE);
                    Self::default()
                },
            },
        };
        config.apply_env_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    fn discover() -> Option<PathBuf> {
        std::iter::once(paths::local_config())
            .chain(paths::user_config())
            .find(|path| path.is_file())
    }

    /// Read and parse one config file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::parse(&content).map_err(|e| match e {
            ConfigError::Parse { source, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            },
            other => other,
        })?;
        info!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Parse configuration text
    pub fn parse(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|source| ConfigError::Parse {
            path: PathBuf::new(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `BOUNTYBOARD_*` overrides using `lookup` to read variables
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup(PORT_ENV) {
            self.server.port = value.trim().parse().map_err(|_| ConfigError::InvalidEnv {
                key: PORT_ENV,
                value: value.clone(),
            })?;
            info!("{PORT_ENV} set, listening on port {}", self.server.port);
        }
        if let Some(value) = lookup(ADMIN_PASSWORD_ENV) {
            self.admin.password = value;
            info!("{ADMIN_PASSWORD_ENV} set, admin password overridden");
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        let mut seen = BTreeSet::new();
        for site in &self.sites {
            if !seen.insert(site.id) {
                return Err(ConfigError::DuplicateSite(site.id));
            }
        }
        Ok(())
    }

    /// Look up a configured site
    #[must_use]
    pub fn site(&self, id: u32) -> Option<&SiteConfig> {
        self.sites.iter().find(|s| s.id == id)
    }

    /// `host:port` for the listener
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }

    /// Presence points configured for catalog-less sites
    #[must_use]
    pub const fn presence_points(&self) -> PresencePoints {
        PresencePoints {
            markup: self.scoring.markup_presence_points,
            stylesheet: self.scoring.stylesheet_presence_points,
        }
    }
}
