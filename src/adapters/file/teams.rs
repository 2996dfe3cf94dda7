//! JSON-file team roster

use std::path::PathBuf;
use std::sync::{Mutex, PoisonError};

use crate::core::models::Team;
use crate::core::ports::TeamRepository;

use super::{read_json, write_json};

/// Roster persisted as a JSON array of teams
#[derive(Debug)]
pub struct JsonTeamRepository {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonTeamRepository {
    /// Repository backed by the file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    fn load(&self) -> anyhow::Result<Vec<Team>> {
        read_json(&self.path)
    }

    fn save(&self, teams: &mut Vec<Team>) -> anyhow::Result<()> {
        teams.sort_by(|a, b| a.name.cmp(&b.name));
        write_json(&self.path, teams)
    }
}

impl TeamRepository for JsonTeamRepository {
    fn list(&self) -> anyhow::Result<Vec<Team>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        self.load()
    }

    fn add(&self, team: Team) -> anyhow::Result<()> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut teams = self.load()?;
        if teams.iter().any(|t| t.name == team.name) {
            anyhow::bail!("Team '{}' already exists", team.name);
        }
        teams.push(team);
        self.save(&mut teams)
    }

    fn remove(&self, name: &str) -> anyhow::Result<bool> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut teams = self.load()?;
        let before = teams.len();
        teams.retain(|t| t.name != name);
        if teams.len() == before {
            return Ok(false);
        }
        self.save(&mut teams)?;
        Ok(true)
    }

    fn update(&self, name: &str, update: &dyn Fn(&mut Team)) -> anyhow::Result<Option<Team>> {
        let _guard = self.lock.lock().unwrap_or_else(PoisonError::into_inner);
        let mut teams = self.load()?;
        let Some(team) = teams.iter_mut().find(|t| t.name == name) else {
            return Ok(None);
        };
        update(team);
        let updated = team.clone();
        self.save(&mut teams)?;
        Ok(Some(updated))
    }
}
