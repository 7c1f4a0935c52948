// src/watch/cache.rs

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

use tracing::debug;

use crate::types::{ChangeDigest, Fingerprint};

/// In-memory cache of the last digest acted upon per fingerprint.
///
/// This avoids POSTing the same status to a callback on every sweep.
/// Cloning is cheap and every clone shares the same map.
#[derive(Debug, Clone, Default)]
pub struct ChangeCache {
    digests: Arc<Mutex<HashMap<Fingerprint, ChangeDigest>>>,
}

impl ChangeCache {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<Fingerprint, ChangeDigest>> {
        // A poisoned map is still a consistent map; every critical section is
        // a single insert/remove/lookup.
        self.digests.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn get(&self, fingerprint: &Fingerprint) -> Option<ChangeDigest> {
        self.lock().get(fingerprint).cloned()
    }

    /// Overwrite the digest for a fingerprint unconditionally.
    pub fn put(&self, fingerprint: Fingerprint, digest: ChangeDigest) {
        debug!(%fingerprint, "updating change digest");
        self.lock().insert(fingerprint, digest);
    }

    pub fn evict(&self, fingerprint: &Fingerprint) {
        if self.lock().remove(fingerprint).is_some() {
            debug!(%fingerprint, "evicted change digest");
        }
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
