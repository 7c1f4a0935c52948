// src/engine/mod.rs

//! Polling engine for playwatch.
//!
//! A sweep moves through `Idle → Sweeping → probe → (Unchanged | Notify)`
//! for each watched target and back to `Idle`:
//! - the pure per-target decision lives in [`core`],
//! - the async shell that probes, notifies and paces lives in [`runtime`],
//! - pacing goes through the [`ticker`] abstraction so tests run sweeps
//!   without real delays.

pub mod core;
pub mod runtime;
pub mod ticker;

pub use self::core::{SweepReport, TargetOutcome, TargetStep, classify};
pub use runtime::{PollCycle, PollOptions};
pub use ticker::{PauseKind, Ticker, TokioTicker};
