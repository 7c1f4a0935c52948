// src/watch/registry.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::{debug, info};
use url::Url;

use crate::errors::{PlaywatchError, Result};
use crate::types::{Fingerprint, WatchRecord};

/// Concurrency-safe set of registered watches, keyed by fingerprint.
///
/// All access goes through one mutex over the whole map. Nothing iterates
/// while holding it: [`WatchRegistry::snapshot`] copies out and releases.
#[derive(Debug, Clone, Default)]
pub struct WatchRegistry {
    records: Arc<Mutex<HashMap<Fingerprint, WatchRecord>>>,
}

impl WatchRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Fingerprint, WatchRecord>> {
        self.records.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Register interest in `target`, delivering changes to `callback`.
    ///
    /// Idempotent: if `(target, callback)` is already registered the existing
    /// record (and its token) is kept and this still returns `Ok(true)`.
    pub fn register(&self, target: &str, callback: &str, token: &str) -> Result<bool> {
        validate_url("page", target)?;
        validate_url("callback", callback)?;
        if token.is_empty() {
            return Err(PlaywatchError::InvalidInput("token must not be empty".to_string()));
        }

        let fingerprint = Fingerprint::of(target, callback);

        let mut records = self.lock();
        if records.contains_key(&fingerprint) {
            debug!(%fingerprint, page = target, "already watching; keeping existing record");
        } else {
            records.insert(fingerprint.clone(), WatchRecord::new(target, token, callback));
            info!(%fingerprint, page = target, callback, "registered watch");
        }

        Ok(true)
    }

    /// Point-in-time copy of every record.
    pub fn snapshot(&self) -> Vec<WatchRecord> {
        let records = self.lock();
        records.values().cloned().collect()
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<WatchRecord> {
        self.lock().get(fingerprint).cloned()
    }

    /// Replace the token of an existing record. No-op if it was evicted.
    pub fn update_token(&self, fingerprint: &Fingerprint, token: impl Into<String>) {
        match self.lock().get_mut(fingerprint) {
            Some(record) => {
                record.token = token.into();
                debug!(%fingerprint, "rotated token");
            }
            None => debug!(%fingerprint, "token update for evicted watch ignored"),
        }
    }

    pub fn evict(&self, fingerprint: &Fingerprint) {
        if let Some(record) = self.lock().remove(fingerprint) {
            info!(%fingerprint, page = %record.target, "evicted watch");
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Accept only non-empty absolute URLs.
fn validate_url(field: &str, value: &str) -> Result<()> {
    if value.is_empty() {
        return Err(PlaywatchError::InvalidInput(format!("{field} must not be empty")));
    }
    Url::parse(value)
        .map(|_| ())
        .map_err(|e| PlaywatchError::InvalidInput(format!("{field} is not an absolute URL: {e}")))
}
