// src/types.rs

//! Domain types shared by the registry, the prober, the poll cycle and the
//! notifier.

use std::fmt;

use crate::watch::hash::{compute_digest, compute_fingerprint};

/// Deterministic identity of one watch registration.
///
/// Derived from `(target, callback)` only, so re-registering the same pair
/// with a different token maps onto the same entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Fingerprint(String);

impl Fingerprint {
    pub fn of(target: &str, callback: &str) -> Self {
        Self(compute_fingerprint(target, callback))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Fingerprint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Short prefix is plenty for log correlation.
        f.write_str(&self.0[..self.0.len().min(12)])
    }
}

/// Summary of the last status acted upon for a fingerprint.
///
/// Equality of two digests means "nothing worth notifying about changed".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeDigest(String);

impl ChangeDigest {
    /// Digest over exactly `(link, active, callback)`.
    pub fn of(snapshot: &StatusSnapshot, callback: &str) -> Self {
        Self(compute_digest(&snapshot.link, snapshot.active, callback))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// One registered watch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WatchRecord {
    /// Page to monitor.
    pub target: String,
    /// Bearer credential sent with the next notification.
    pub token: String,
    /// Where notifications are POSTed.
    pub callback: String,
}

impl WatchRecord {
    pub fn new(
        target: impl Into<String>,
        token: impl Into<String>,
        callback: impl Into<String>,
    ) -> Self {
        Self {
            target: target.into(),
            token: token.into(),
            callback: callback.into(),
        }
    }

    pub fn fingerprint(&self) -> Fingerprint {
        Fingerprint::of(&self.target, &self.callback)
    }
}

/// Result of probing a target page once.
///
/// `label`, `link` and `icon` are empty unless `active` is true.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSnapshot {
    pub reachable: bool,
    pub active: bool,
    pub label: String,
    pub link: String,
    pub icon: String,
}

impl StatusSnapshot {
    /// Snapshot for a page that did not answer with a success status.
    pub fn unreachable() -> Self {
        Self::default()
    }

    /// Drop metadata that only makes sense while `active` is set.
    pub fn normalized(mut self) -> Self {
        if !self.active {
            self.label.clear();
            self.link.clear();
            self.icon.clear();
        }
        self
    }
}
