pub mod routes;

use crate::leagues::LeagueRequest;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use league_core::{League, Match, StandingsEntry};
use serde::{Deserialize, Serialize};

/// Everything the league detail view renders.
#[derive(Serialize, Deserialize)]
pub struct LeagueDetails {
    pub league: League,
    pub matches: Vec<Match>,
    pub standings: Vec<StandingsEntry>,
}

pub async fn league_get_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> ApiResult<Json<LeagueDetails>> {
    let store = state.store.read().await;

    let league = store
        .league(&route_params.league_id)
        .ok_or_else(|| {
            ApiError::NotFound(format!("League with id {} not found", route_params.league_id))
        })?
        .clone();

    let standings = store.standings(&league.id)?;
    let matches = store.matches(&league.id).to_vec();

    Ok(Json(LeagueDetails {
        league,
        matches,
        standings,
    }))
}

pub async fn league_update_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
    Json(league): Json<League>,
) -> ApiResult<StatusCode> {
    if league.id != route_params.league_id {
        return Err(ApiError::BadRequest(format!(
            "League id {} does not match path id {}",
            league.id, route_params.league_id
        )));
    }

    state.store.write().await.update_league(league)?;

    Ok(StatusCode::NO_CONTENT)
}

pub async fn league_complete_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> StatusCode {
    state
        .store
        .write()
        .await
        .complete_league(&route_params.league_id);

    StatusCode::NO_CONTENT
}

pub async fn league_delete_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> StatusCode {
    state
        .store
        .write()
        .await
        .delete_league(&route_params.league_id);

    StatusCode::NO_CONTENT
}
