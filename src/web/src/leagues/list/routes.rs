use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route(
        "/api/leagues",
        get(super::league_list_action).post(super::league_create_action),
    )
}
