// src/probe/backend.rs

//! Pluggable prober abstraction.
//!
//! The poll cycle talks to a `Prober` instead of an HTTP client directly, so
//! tests can script page states without a network.

use std::future::Future;
use std::pin::Pin;

use reqwest::{Client, StatusCode};
use thiserror::Error;
use tracing::debug;

use crate::probe::extract::extract_status;
use crate::types::StatusSnapshot;

/// Probe that never reached an HTTP status, or whose body could not be read.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ProbeError {
    #[error("request to target failed: {0}")]
    Transport(String),

    #[error("reading target body failed: {0}")]
    Body(String),
}

/// What a completed probe saw.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    /// HTTP status code of the page response.
    pub status: u16,
    pub snapshot: StatusSnapshot,
}

impl ProbeOutcome {
    /// Only a plain 200 counts; redirects and other 2xx are skipped too.
    pub fn is_success(&self) -> bool {
        self.status == StatusCode::OK.as_u16()
    }
}

pub type ProbeResult = std::result::Result<ProbeOutcome, ProbeError>;

/// Trait abstracting how a target page is fetched and interpreted.
pub trait Prober: Send + Sync {
    fn probe<'a>(
        &'a self,
        target: &'a str,
    ) -> Pin<Box<dyn Future<Output = ProbeResult> + Send + 'a>>;
}

/// Production prober: GET the page and extract the profile status from HTML.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: Client,
}

impl HttpProber {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl Prober for HttpProber {
    fn probe<'a>(
        &'a self,
        target: &'a str,
    ) -> Pin<Box<dyn Future<Output = ProbeResult> + Send + 'a>> {
        Box::pin(async move {
            let response = self
                .client
                .get(target)
                .send()
                .await
                .map_err(|e| ProbeError::Transport(e.to_string()))?;

            let status = response.status();
            if status != StatusCode::OK {
                debug!(page = target, %status, "target answered without success");
                return Ok(ProbeOutcome {
                    status: status.as_u16(),
                    snapshot: StatusSnapshot::unreachable(),
                });
            }

            let body = response
                .text()
                .await
                .map_err(|e| ProbeError::Body(e.to_string()))?;

            Ok(ProbeOutcome {
                status: status.as_u16(),
                snapshot: extract_status(&body),
            })
        })
    }
}
