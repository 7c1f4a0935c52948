// src/engine/core.rs

//! Pure per-target decision logic.
//!
//! Given a record, what the prober saw, and what the change cache holds,
//! decide what the sweep should do next. No IO, no locks, no Tokio, so the
//! dedup rules can be tested directly.

use crate::probe::ProbeResult;
use crate::types::{ChangeDigest, StatusSnapshot, WatchRecord};

/// Decision for one target within a sweep.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TargetStep {
    /// Probe did not succeed; leave every piece of state alone.
    ProbeFailed {
        /// HTTP status, if the target answered at all.
        status: Option<u16>,
    },
    /// Same digest as last time; nothing to deliver.
    Unchanged,
    /// New digest: record it, then notify.
    Changed {
        digest: ChangeDigest,
        snapshot: StatusSnapshot,
    },
}

/// Classify a probe result against the cached digest for `record`.
pub fn classify(
    record: &WatchRecord,
    probe: ProbeResult,
    cached: Option<&ChangeDigest>,
) -> TargetStep {
    let outcome = match probe {
        Ok(outcome) if outcome.is_success() => outcome,
        Ok(outcome) => {
            return TargetStep::ProbeFailed {
                status: Some(outcome.status),
            };
        }
        Err(_) => return TargetStep::ProbeFailed { status: None },
    };

    let digest = ChangeDigest::of(&outcome.snapshot, &record.callback);
    if cached == Some(&digest) {
        return TargetStep::Unchanged;
    }

    TargetStep::Changed {
        digest,
        snapshot: outcome.snapshot,
    }
}

/// How one target's visit ended, once any delivery has finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetOutcome {
    ProbeFailed,
    Unchanged,
    Rotated,
    Evicted,
}

impl TargetOutcome {
    /// Whether the sweep pauses before the next target.
    ///
    /// Only failed probes and delivered notifications pace. Unchanged and
    /// evicted targets move straight on.
    pub fn paces(self) -> bool {
        matches!(self, TargetOutcome::ProbeFailed | TargetOutcome::Rotated)
    }
}

/// Counters for one sweep, mostly for logging and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SweepReport {
    /// Records in the snapshot the sweep worked from.
    pub watched: usize,
    pub probe_failures: usize,
    pub unchanged: usize,
    pub rotated: usize,
    pub evicted: usize,
}

impl SweepReport {
    pub fn record(&mut self, outcome: TargetOutcome) {
        match outcome {
            TargetOutcome::ProbeFailed => self.probe_failures += 1,
            TargetOutcome::Unchanged => self.unchanged += 1,
            TargetOutcome::Rotated => self.rotated += 1,
            TargetOutcome::Evicted => self.evicted += 1,
        }
    }

    /// Notifications attempted, whatever their outcome.
    pub fn notified(&self) -> usize {
        self.rotated + self.evicted
    }
}
