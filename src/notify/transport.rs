// src/notify/transport.rs

//! Pluggable webhook transport.
//!
//! The notifier hands a [`WebhookRequest`] to a `WebhookTransport` and gets
//! the raw response body back. Interpreting that body is the notifier's job.

use std::future::Future;
use std::pin::Pin;

use reqwest::Client;
use thiserror::Error;

use crate::notify::webhook::{ROUTE_HEADER, TOKEN_HEADER, WebhookRequest};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportError {
    #[error("could not build webhook request: {0}")]
    Build(String),

    #[error("webhook request failed: {0}")]
    Send(String),

    #[error("reading webhook response failed: {0}")]
    Body(String),
}

/// Trait abstracting how a webhook is delivered.
pub trait WebhookTransport: Send + Sync {
    /// POST the request and return the response body, whatever its status.
    fn deliver<'a>(
        &'a self,
        request: &'a WebhookRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>>;
}

/// Production transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl WebhookTransport for HttpTransport {
    fn deliver<'a>(
        &'a self,
        request: &'a WebhookRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>> {
        Box::pin(async move {
            let built = self
                .client
                .post(&request.callback)
                .header(ROUTE_HEADER, &request.route)
                .header(TOKEN_HEADER, &request.token)
                // Sets the form content type as well.
                .form(&request.form)
                .build()
                .map_err(|e| TransportError::Build(e.to_string()))?;

            let response = self
                .client
                .execute(built)
                .await
                .map_err(|e| TransportError::Send(e.to_string()))?;

            response
                .text()
                .await
                .map_err(|e| TransportError::Body(e.to_string()))
        })
    }
}
