use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new().route(
        "/api/leagues/{league_id}/matches",
        get(super::league_matches_action).put(super::league_matches_replace_action),
    )
}
