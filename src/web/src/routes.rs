use crate::LeagueAppData;
use crate::common::default_handler::default_handler;
use crate::leagues::league_routes;
use axum::Router;

pub struct ServerRoutes;

impl ServerRoutes {
    pub fn create() -> Router<LeagueAppData> {
        Router::<LeagueAppData>::new()
            .merge(league_routes())
            .fallback(default_handler)
    }
}
