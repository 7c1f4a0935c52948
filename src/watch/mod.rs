// src/watch/mod.rs

//! Watch bookkeeping.
//!
//! This module owns the two pieces of shared state:
//! - the [`WatchRegistry`] of registered `(target, callback)` pairs and their
//!   current tokens,
//! - the [`ChangeCache`] of digests used to suppress redundant notifications.
//!
//! Both are keyed by the same [`Fingerprint`](crate::types::Fingerprint).
//! Neither knows about HTTP; they are plain locked maps.

pub mod cache;
pub mod hash;
pub mod registry;

pub use cache::ChangeCache;
pub use hash::{compute_digest, compute_fingerprint};
pub use registry::WatchRegistry;
