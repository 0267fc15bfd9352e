use crate::LeagueAppData;
use axum::Router;
use axum::routing::{get, post};

pub fn routes() -> Router<LeagueAppData> {
    Router::new()
        .route(
            "/api/leagues/{league_id}",
            get(super::league_get_action)
                .put(super::league_update_action)
                .delete(super::league_delete_action),
        )
        .route(
            "/api/leagues/{league_id}/complete",
            post(super::league_complete_action),
        )
}
