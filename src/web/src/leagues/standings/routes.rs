use crate::LeagueAppData;
use axum::Router;
use axum::routing::get;

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route(
            "/api/leagues/{league_id}/standings",
            get(super::league_standings_action),
        )
        .route(
            "/api/leagues/{league_id}/standings/half-time",
            get(super::league_half_time_standings_action),
        )
        .route("/api/leagues/{league_id}/form", get(super::league_form_action))
}
