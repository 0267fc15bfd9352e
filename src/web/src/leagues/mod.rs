pub mod get;
pub mod list;
pub mod matches;
pub mod standings;

use crate::LeagueAppData;
use axum::Router;
use serde::Deserialize;

#[derive(Deserialize)]
pub struct LeagueRequest {
    pub league_id: String,
}

pub fn league_routes() -> Router<LeagueAppData> {
    Router::new()
        .merge(list::routes::routes())
        .merge(get::routes::routes())
        .merge(matches::routes::routes())
        .merge(standings::routes::routes())
}
