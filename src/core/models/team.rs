//! Team model

use serde::{Deserialize, Serialize};

/// A participating team
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    /// Team name, unique across the roster
    pub name: String,

    /// Login password (stored as given)
    pub password: String,

    /// Site template assigned to the team
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<u32>,
}

impl Team {
    /// Create a team without a site assignment
    #[must_use]
    pub fn new(name: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            password: password.into(),
            site_id: None,
        }
    }

    /// Builder-style site assignment
    #[must_use]
    pub const fn with_site(mut self, site_id: Option<u32>) -> Self {
        self.site_id = site_id;
        self
    }

    /// File-system safe form of the team name
    ///
    /// e.g. "Bug Squashers" -> "bug-squashers"
    #[must_use]
    pub fn slug(&self) -> String {
        self.name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '-' })
            .collect::<String>()
            .to_lowercase()
    }
}

/// Parse a roster CSV export into teams
///
/// Each row is `name,password[,site]`. Rows with fewer than two fields or an
/// empty name are skipped, as are unparseable site ids.
#[must_use]
pub fn parse_roster_csv(content: &str) -> Vec<Team> {
    content
        .lines()
        .filter_map(|line| {
            let fields: Vec<&str> = line.split(',').map(str::trim).collect();
            if fields.len() < 2 || fields[0].is_empty() {
                return None;
            }
            let site_id = fields.get(2).and_then(|s| s.parse().ok());
            Some(Team::new(fields[0], fields[1]).with_site(site_id))
        })
        .collect()
}
