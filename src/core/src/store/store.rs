use crate::league::{League, LeagueStatus, Searchable};
use crate::r#match::Match;
use crate::standings::{
    StandingsEntry, TeamForm, build_form_table, build_half_time_standings, build_standings,
};
use crate::store::StoreError;
use log::{debug, info};
use std::collections::HashMap;

/// Owner of every league record and of the match list recorded for each of them.
///
/// Mutations addressed at an unknown league id are silent no-ops, while reads
/// that need a league (standings, match replacement) report `LeagueNotFound`.
#[derive(Debug, Default)]
pub struct LeagueStore {
    leagues: Vec<League>,
    matches: HashMap<String, Vec<Match>>,
    open_league_id: Option<String>,
}

impl LeagueStore {
    pub fn new() -> Self {
        LeagueStore::default()
    }

    pub fn with_leagues(leagues: Vec<League>) -> Result<Self, StoreError> {
        let mut store = LeagueStore::new();

        for league in leagues {
            store.insert_league(league)?;
        }

        Ok(store)
    }

    // ========== LEAGUES ==========

    pub fn leagues(&self) -> &[League] {
        &self.leagues
    }

    pub fn league(&self, id: &str) -> Option<&League> {
        self.leagues.iter().find(|league| league.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.league(id).is_some()
    }

    fn league_mut(&mut self, id: &str) -> Option<&mut League> {
        self.leagues.iter_mut().find(|league| league.id == id)
    }

    pub fn filter_leagues(&self, term: &str) -> Vec<&League> {
        self.leagues
            .iter()
            .filter(|league| league.matches_search(term))
            .collect()
    }

    fn insert_league(&mut self, league: League) -> Result<&League, StoreError> {
        if league.id.trim().is_empty() {
            return Err(StoreError::InvalidId);
        }

        if self.contains(&league.id) {
            return Err(StoreError::DuplicateLeague(league.id));
        }

        self.leagues.push(league);

        Ok(&self.leagues[self.leagues.len() - 1])
    }

    /// Appends a new in-progress league. Ids are unique; a collision is rejected.
    pub fn create_league(&mut self, id: &str) -> Result<&League, StoreError> {
        let league = League::new(id.trim());

        let created = self.insert_league(league)?;

        info!("league created: {}", created.id);

        Ok(created)
    }

    pub fn update_league_status(
        &mut self,
        id: &str,
        status: LeagueStatus,
    ) -> Result<(), StoreError> {
        let Some(league) = self.league_mut(id) else {
            debug!("status update ignored, league {} not found", id);
            return Ok(());
        };

        if !league.status.can_become(status) {
            return Err(StoreError::StatusRegression(league.id.clone()));
        }

        league.status = status;

        info!("league {} is now {}", id, status);

        Ok(())
    }

    pub fn complete_league(&mut self, id: &str) {
        if let Some(league) = self.league_mut(id) {
            league.status = LeagueStatus::Completed;
            info!("league {} completed", id);
        } else {
            debug!("complete ignored, league {} not found", id);
        }
    }

    /// Replaces the whole record carrying `updated.id`.
    pub fn update_league(&mut self, updated: League) -> Result<(), StoreError> {
        let Some(league) = self.league_mut(&updated.id) else {
            debug!("update ignored, league {} not found", updated.id);
            return Ok(());
        };

        if !league.status.can_become(updated.status) {
            return Err(StoreError::StatusRegression(updated.id));
        }

        *league = updated;

        info!("league {} updated", league.id);

        Ok(())
    }

    /// Removes the league and its matches. Returns whether anything was removed.
    pub fn delete_league(&mut self, id: &str) -> bool {
        let before = self.leagues.len();

        self.leagues.retain(|league| league.id != id);

        if self.leagues.len() == before {
            debug!("delete ignored, league {} not found", id);
            return false;
        }

        self.matches.remove(id);

        if self.open_league_id.as_deref() == Some(id) {
            self.open_league_id = None;
        }

        info!("league {} deleted", id);

        true
    }

    // ========== OPEN LEAGUE ==========

    pub fn open_league(&mut self, id: &str) -> bool {
        if !self.contains(id) {
            debug!("open ignored, league {} not found", id);
            return false;
        }

        self.open_league_id = Some(id.to_string());

        true
    }

    pub fn close_league(&mut self) {
        self.open_league_id = None;
    }

    pub fn open_league_id(&self) -> Option<&str> {
        self.open_league_id.as_deref()
    }

    // ========== MATCHES ==========

    pub fn matches(&self, id: &str) -> &[Match] {
        self.matches.get(id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn open_matches(&self) -> &[Match] {
        match &self.open_league_id {
            Some(id) => self.matches(id),
            None => &[],
        }
    }

    /// Replaces the match list of the league currently open for editing.
    pub fn replace_matches(&mut self, matches: Vec<Match>) -> Result<(), StoreError> {
        let id = self.open_league_id.clone().ok_or(StoreError::NoOpenLeague)?;

        self.replace_league_matches(&id, matches)
    }

    /// Validates every record before touching state, so a rejected list
    /// leaves the previous one in place.
    pub fn replace_league_matches(
        &mut self,
        id: &str,
        matches: Vec<Match>,
    ) -> Result<(), StoreError> {
        if !self.contains(id) {
            return Err(StoreError::LeagueNotFound(id.to_string()));
        }

        for (index, item) in matches.iter().enumerate() {
            item.validate()
                .map_err(|source| StoreError::InvalidMatch { index, source })?;
        }

        info!("league {}: {} matches recorded", id, matches.len());

        self.matches.insert(id.to_string(), matches);

        Ok(())
    }

    // ========== STANDINGS ==========

    fn known_matches(&self, id: &str) -> Result<&[Match], StoreError> {
        if !self.contains(id) {
            return Err(StoreError::LeagueNotFound(id.to_string()));
        }

        Ok(self.matches(id))
    }

    pub fn standings(&self, id: &str) -> Result<Vec<StandingsEntry>, StoreError> {
        Ok(build_standings(self.known_matches(id)?)?)
    }

    pub fn half_time_standings(&self, id: &str) -> Result<Vec<StandingsEntry>, StoreError> {
        Ok(build_half_time_standings(self.known_matches(id)?)?)
    }

    pub fn form_table(&self, id: &str) -> Result<Vec<TeamForm>, StoreError> {
        Ok(build_form_table(self.known_matches(id)?)?)
    }
}
