//! Team repository port
//!
//! Defines the interface for managing the team roster.

use super::super::models::Team;

/// Repository for the team roster
///
/// Implementations handle persistence; names are unique.
pub trait TeamRepository: Send + Sync {
    /// List all teams ordered by name
    fn list(&self) -> anyhow::Result<Vec<Team>>;

    /// Add a team; fails if the name is taken
    fn add(&self, team: Team) -> anyhow::Result<()>;

    /// Remove a team; returns whether it existed
    fn remove(&self, name: &str) -> anyhow::Result<bool>;

    /// Apply `update` to the named team and persist it
    ///
    /// Returns the updated team, or `None` if no such team exists.
    fn update(&self, name: &str, update: &dyn Fn(&mut Team)) -> anyhow::Result<Option<Team>>;

    /// Find a team by name
    fn get(&self, name: &str) -> anyhow::Result<Option<Team>> {
        Ok(self.list()?.into_iter().find(|t| t.name == name))
    }

    /// Return the team when `password` matches
    fn authenticate(&self, name: &str, password: &str) -> anyhow::Result<Option<Team>> {
        Ok(self.get(name)?.filter(|t| t.password == password))
    }

    /// Add every team not already present; returns how many were added
    fn import(&self, teams: Vec<Team>) -> anyhow::Result<usize> {
        let mut added = 0;
        for team in teams {
            if self.get(&team.name)?.is_none() {
                self.add(team)?;
                added += 1;
            }
        }
        Ok(added)
    }
}
