// src/notify/webhook.rs

//! Webhook wire format: the outbound form and the expected acknowledgment.

use serde::Deserialize;
use thiserror::Error;

use crate::notify::transport::TransportError;
use crate::types::{StatusSnapshot, WatchRecord};

/// Header naming the source of a notification.
pub const ROUTE_HEADER: &str = "API-Route";
/// Header carrying the registration's current token.
pub const TOKEN_HEADER: &str = "API-Token";

/// Everything needed to POST one notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WebhookRequest {
    pub callback: String,
    pub token: String,
    /// Value of the [`ROUTE_HEADER`].
    pub route: String,
    pub form: Vec<(&'static str, String)>,
}

impl WebhookRequest {
    pub fn new(record: &WatchRecord, snapshot: &StatusSnapshot, route: &str) -> Self {
        let form = vec![
            ("page", record.target.clone()),
            ("gameName", snapshot.label.clone()),
            ("gameLink", snapshot.link.clone()),
            ("gameIcon", snapshot.icon.clone()),
            ("isPlaying", snapshot.active.to_string()),
        ];

        Self {
            callback: record.callback.clone(),
            token: record.token.clone(),
            route: route.to_string(),
            form,
        }
    }

    /// Look up a form field by name.
    pub fn field(&self, name: &str) -> Option<&str> {
        self.form
            .iter()
            .find(|(key, _)| *key == name)
            .map(|(_, value)| value.as_str())
    }
}

/// Why a notification ended the registration.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryFailure {
    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("acknowledgment is not valid JSON: {0}")]
    MalformedAck(String),

    #[error("callback did not report success")]
    Rejected,

    #[error("acknowledgment carried no refresh token")]
    MissingRefresh,
}

#[derive(Debug, Default, Deserialize)]
struct Ack {
    #[serde(default)]
    success: bool,
    #[serde(default)]
    data: AckData,
}

#[derive(Debug, Default, Deserialize)]
struct AckData {
    #[serde(default)]
    refresh: String,
}

/// Interpret a callback response body, returning the refreshed token.
///
/// Expected shape: `{ "success": true, "data": { "refresh": "<token>" } }`.
pub fn parse_ack(body: &str) -> Result<String, DeliveryFailure> {
    let ack: Ack =
        serde_json::from_str(body).map_err(|e| DeliveryFailure::MalformedAck(e.to_string()))?;

    if !ack.success {
        return Err(DeliveryFailure::Rejected);
    }
    if ack.data.refresh.is_empty() {
        return Err(DeliveryFailure::MissingRefresh);
    }

    Ok(ack.data.refresh)
}
