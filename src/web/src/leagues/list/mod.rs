pub mod routes;

use crate::{ApiResult, LeagueAppData};
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use league_core::League;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LeagueListRequest {
    #[serde(default)]
    pub search: String,
}

#[derive(Deserialize)]
pub struct LeagueCreateRequest {
    pub id: String,
}

pub async fn league_list_action(
    State(state): State<LeagueAppData>,
    Query(request): Query<LeagueListRequest>,
) -> Json<Vec<League>> {
    let store = state.store.read().await;

    let leagues = store
        .filter_leagues(&request.search)
        .into_iter()
        .cloned()
        .collect();

    Json(leagues)
}

pub async fn league_create_action(
    State(state): State<LeagueAppData>,
    Json(request): Json<LeagueCreateRequest>,
) -> ApiResult<impl IntoResponse> {
    let mut store = state.store.write().await;

    let league = store.create_league(&request.id)?.clone();

    Ok((StatusCode::CREATED, Json(league)))
}
