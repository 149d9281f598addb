//! HTTP API Server
//!
//! Axum server exposing the cached trend data as JSON.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::cache::TrendCache;

pub mod handlers;
pub mod routes;

pub use handlers::AppState;
pub use routes::create_router;

pub struct HttpServer {
    listen_addr: SocketAddr,
    cache: Arc<TrendCache>,
}

impl HttpServer {
    pub fn new(listen_addr: SocketAddr, cache: Arc<TrendCache>) -> Self {
        Self { listen_addr, cache }
    }

    /// Serves until Ctrl-C.
    pub async fn run(&self) -> Result<()> {
        let app = create_router(AppState { cache: self.cache.clone() })
            .layer(TraceLayer::new_for_http());

        let listener = TcpListener::bind(&self.listen_addr)
            .await
            .context("Failed to bind HTTP server")?;

        info!("HTTP server listening on http://{}", self.listen_addr);

        axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = tokio::signal::ctrl_c().await;
                info!("HTTP server shutting down");
            })
            .await
            .context("HTTP server error")?;

        Ok(())
    }
}
