pub mod routes;

use crate::leagues::LeagueRequest;
use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Path, State};
use league_core::{StandingsEntry, TeamForm};

pub async fn league_standings_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> ApiResult<Json<Vec<StandingsEntry>>> {
    let store = state.store.read().await;

    Ok(Json(store.standings(&route_params.league_id)?))
}

pub async fn league_half_time_standings_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> ApiResult<Json<Vec<StandingsEntry>>> {
    let store = state.store.read().await;

    Ok(Json(store.half_time_standings(&route_params.league_id)?))
}

pub async fn league_form_action(
    State(state): State<LeagueAppData>,
    Path(route_params): Path<LeagueRequest>,
) -> ApiResult<Json<Vec<TeamForm>>> {
    let store = state.store.read().await;

    Ok(Json(store.form_table(&route_params.league_id)?))
}
