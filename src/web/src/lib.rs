mod common;
pub mod config;
mod error;
mod leagues;
mod routes;

pub use config::{ConfigError, SeedMode, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use routes::ServerRoutes;

use axum::Router;
use axum::response::IntoResponse;
use league_core::LeagueStore;
use log::{error, info};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueDashboardServer {
    data: LeagueAppData,
    addr: SocketAddr,
}

impl LeagueDashboardServer {
    pub fn new(data: LeagueAppData, addr: SocketAddr) -> Self {
        LeagueDashboardServer { data, addr }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = build_router(self.data.clone());

        let listener = TcpListener::bind(self.addr).await.map_err(|e| {
            error!("Failed to bind to address {}: {}", self.addr, e);
            e
        })?;

        info!("listen at: http://{}", self.addr);

        axum::serve(listener, app).await.map_err(|e| {
            error!("Server error: {}", e);
            e
        })
    }
}

/// Full application router with state attached.
pub fn build_router(data: LeagueAppData) -> Router {
    ServerRoutes::create()
        .layer(
            ServiceBuilder::new()
                // Catch panics in handlers and convert them to 500 errors
                .layer(CatchPanicLayer::custom(|_err| {
                    ApiError::InternalError("handler panicked".to_string()).into_response()
                })),
        )
        .with_state(data)
}

#[derive(Clone)]
pub struct LeagueAppData {
    pub store: Arc<RwLock<LeagueStore>>,
}

impl LeagueAppData {
    pub fn new(store: LeagueStore) -> Self {
        LeagueAppData {
            store: Arc::new(RwLock::new(store)),
        }
    }
}
