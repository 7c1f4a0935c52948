// src/server/mod.rs

//! Registration API.
//!
//! - `GET /` (and any unknown path): liveness text.
//! - `POST /wake`: echo an identifier.
//! - `POST /lookup`: register a watch.
//!
//! Any other method on `/wake` or `/lookup` answers 400.

pub mod handlers;

use std::future::Future;
use std::net::SocketAddr;

use anyhow::Context;
use axum::Router;
use axum::routing::{any, post};
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::Result;
use crate::watch::WatchRegistry;

use handlers::{index, lookup, reject_method, wake};

/// Shared state handed to every request handler.
#[derive(Debug, Clone)]
pub struct AppState {
    pub registry: WatchRegistry,
}

pub fn router(registry: WatchRegistry) -> Router {
    Router::new()
        .route("/", any(index))
        .route("/wake", post(wake).fallback(reject_method))
        .route("/lookup", post(lookup).fallback(reject_method))
        .fallback(index)
        .with_state(AppState { registry })
}

/// Bind `addr` and serve the API until `shutdown` resolves.
pub async fn serve(
    addr: SocketAddr,
    registry: WatchRegistry,
    shutdown: impl Future<Output = ()> + Send + 'static,
) -> Result<()> {
    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding API listener on {addr}"))?;

    info!(%addr, "registration API listening");

    axum::serve(listener, router(registry))
        .with_graceful_shutdown(shutdown)
        .await
        .context("serving registration API")?;

    Ok(())
}
