// src/engine/ticker.rs

//! Pacing abstraction for the poll cycle.
//!
//! Production code sleeps on the Tokio timer; tests provide a ticker that
//! records the requested pauses and returns immediately.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// Which pause the poll cycle is asking for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseKind {
    /// Between two targets of the same sweep.
    BetweenTargets,
    /// After a full sweep, before taking the next snapshot.
    BetweenSweeps,
}

pub trait Ticker: Send + Sync {
    fn pause(
        &self,
        kind: PauseKind,
        delay: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>>;
}

/// Real-time ticker backed by `tokio::time::sleep`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioTicker;

impl Ticker for TokioTicker {
    fn pause(
        &self,
        _kind: PauseKind,
        delay: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        Box::pin(tokio::time::sleep(delay))
    }
}
