// src/probe/mod.rs

//! Fetching and interpreting watched pages.
//!
//! - [`backend`] holds the `Prober` trait and the reqwest-backed
//!   `HttpProber` used in production.
//! - [`extract`] turns a profile page's HTML into a `StatusSnapshot`.

pub mod backend;
pub mod extract;

pub use backend::{HttpProber, ProbeError, ProbeOutcome, ProbeResult, Prober};
pub use extract::extract_status;
