use crate::DatabaseError;
use serde::Deserialize;

const STATIC_MATCHES_JSON: &str = include_str!("../../data/matches.json");

#[derive(Deserialize)]
pub struct LeagueMatchesEntity {
    pub league_id: String,
    pub matches: Vec<MatchEntity>,
}

#[derive(Deserialize)]
pub struct MatchEntity {
    pub round: String,
    pub date: String,
    pub home_team: String,
    pub away_team: String,
    pub ht_home_score: u8,
    pub ht_away_score: u8,
    pub home_score: u8,
    pub away_score: u8,
}

pub struct MatchLoader;

impl MatchLoader {
    pub fn load() -> Result<Vec<LeagueMatchesEntity>, DatabaseError> {
        serde_json::from_str(STATIC_MATCHES_JSON).map_err(|source| DatabaseError::Json {
            file: "matches.json",
            source,
        })
    }
}
