// src/server/handlers.rs

use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::server::AppState;

pub const ONLINE_MESSAGE: &str = "Server is online!";

#[derive(Debug, Default, Deserialize)]
pub struct WakeRequest {
    #[serde(default)]
    pub identifier: String,
}

#[derive(Debug, Default, Deserialize)]
pub struct LookupRequest {
    #[serde(default)]
    pub page: String,
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub callback: String,
}

#[derive(Debug, Serialize)]
pub struct LookupResponse {
    pub success: bool,
}

/// Liveness marker. Also serves every unmatched path.
pub async fn index() -> &'static str {
    ONLINE_MESSAGE
}

/// Echo the caller's identifier back as plain text.
pub async fn wake(body: Bytes) -> Response {
    match serde_json::from_slice::<WakeRequest>(&body) {
        Ok(req) if !req.identifier.is_empty() => (StatusCode::OK, req.identifier).into_response(),
        _ => StatusCode::BAD_REQUEST.into_response(),
    }
}

/// Register a `(page, callback)` watch with its initial token.
///
/// Bodies are decoded by hand rather than with the `Json` extractor so that
/// every malformed request maps to a bare 400, whatever its content type.
pub async fn lookup(State(state): State<AppState>, body: Bytes) -> Response {
    let req = match serde_json::from_slice::<LookupRequest>(&body) {
        Ok(req) => req,
        Err(e) => {
            debug!(error = %e, "rejecting undecodable lookup body");
            return StatusCode::BAD_REQUEST.into_response();
        }
    };

    match state.registry.register(&req.page, &req.callback, &req.token) {
        Ok(success) => Json(LookupResponse { success }).into_response(),
        Err(e) => {
            debug!(error = %e, "rejecting lookup");
            StatusCode::BAD_REQUEST.into_response()
        }
    }
}

/// Wrong method on a known route.
pub async fn reject_method() -> StatusCode {
    StatusCode::BAD_REQUEST
}
