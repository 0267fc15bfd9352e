pub mod routes;

use crate::leagues::LeagueRequest;
use crate::{ApiError, ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use league_core::Match;

pub async fn league_matches_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> ApiResult<Json<Vec<Match>>> {
    let store = state.store.read().await;

    if !store.contains(&route_params.league_id) {
        return Err(ApiError::NotFound(format!(
            "League with id {} not found",
            route_params.league_id
        )));
    }

    Ok(Json(store.matches(&route_params.league_id).to_vec()))
}

/// Replaces the league's whole result list; partial edits are not supported.
pub async fn league_matches_replace_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
    Json(matches): Json<Vec<Match>>,
) -> ApiResult<StatusCode> {
    state
        .store
        .write()
        .await
        .replace_league_matches(&route_params.league_id, matches)?;

    Ok(StatusCode::NO_CONTENT)
}
