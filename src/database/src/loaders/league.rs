use crate::DatabaseError;
use league_core::LeagueStatus;
use serde::Deserialize;

const STATIC_LEAGUES_JSON: &str = include_str!("../../data/leagues.json");

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeagueEntity {
    pub id: String,
    pub season: String,
    pub winner: String,
    pub second_place: String,
    pub third_place: String,
    pub status: LeagueStatus,
}

pub struct LeagueLoader;

impl LeagueLoader {
    pub fn load() -> Result<Vec<LeagueEntity>, DatabaseError> {
        serde_json::from_str(STATIC_LEAGUES_JSON).map_err(|source| DatabaseError::Json {
            file: "leagues.json",
            source,
        })
    }
}
