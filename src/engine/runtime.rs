// src/engine/runtime.rs

use std::fmt;
use std::time::Duration;

use tracing::{debug, info};

use crate::config::PollSettings;
use crate::notify::{DeliveryOutcome, Notifier, WebhookTransport};
use crate::probe::Prober;
use crate::types::WatchRecord;
use crate::watch::{ChangeCache, WatchRegistry};

use super::core::{SweepReport, TargetOutcome, TargetStep, classify};
use super::ticker::{PauseKind, Ticker};

/// Delays used by the poll cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollOptions {
    /// Pause after a target whose probe failed or whose notification was
    /// acknowledged.
    pub target_delay: Duration,
    /// Pause after each complete sweep.
    pub sweep_delay: Duration,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            target_delay: Duration::from_secs(3),
            sweep_delay: Duration::from_secs(30),
        }
    }
}

impl From<&PollSettings> for PollOptions {
    fn from(settings: &PollSettings) -> Self {
        Self {
            target_delay: settings.target_delay,
            sweep_delay: settings.sweep_delay,
        }
    }
}

/// Background loop that re-probes every watch and notifies on change.
///
/// This is the IO shell around [`classify`]: it owns the prober, notifier and
/// ticker, and applies each [`TargetStep`] to the shared stores. Probes run
/// one at a time; no lock is held while a probe or webhook is in flight.
pub struct PollCycle<P: Prober, W: WebhookTransport, K: Ticker> {
    registry: WatchRegistry,
    cache: ChangeCache,
    prober: P,
    notifier: Notifier<W>,
    ticker: K,
    options: PollOptions,
}

impl<P: Prober, W: WebhookTransport, K: Ticker> fmt::Debug for PollCycle<P, W, K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PollCycle")
            .field("options", &self.options)
            .field("watched", &self.registry.len())
            .finish_non_exhaustive()
    }
}

impl<P: Prober, W: WebhookTransport, K: Ticker> PollCycle<P, W, K> {
    pub fn new(
        registry: WatchRegistry,
        cache: ChangeCache,
        prober: P,
        notifier: Notifier<W>,
        ticker: K,
        options: PollOptions,
    ) -> Self {
        Self {
            registry,
            cache,
            prober,
            notifier,
            ticker,
            options,
        }
    }

    /// Sweep forever. The process lifetime is the loop's lifetime.
    pub async fn run(self) {
        info!(
            target_delay = ?self.options.target_delay,
            sweep_delay = ?self.options.sweep_delay,
            "poll cycle started"
        );

        loop {
            let report = self.run_sweep().await;
            debug!(?report, "sweep finished");

            self.ticker
                .pause(PauseKind::BetweenSweeps, self.options.sweep_delay)
                .await;
        }
    }

    /// One pass over a point-in-time snapshot of the registry.
    ///
    /// Watches registered while the sweep runs are picked up by the next one.
    pub async fn run_sweep(&self) -> SweepReport {
        let records = self.registry.snapshot();
        let mut report = SweepReport {
            watched: records.len(),
            ..SweepReport::default()
        };

        for record in records {
            let outcome = self.visit(&record).await;
            report.record(outcome);

            if outcome.paces() {
                self.ticker
                    .pause(PauseKind::BetweenTargets, self.options.target_delay)
                    .await;
            }
        }

        report
    }

    async fn visit(&self, record: &WatchRecord) -> TargetOutcome {
        let fingerprint = record.fingerprint();
        let probe = self.prober.probe(&record.target).await;
        let cached = self.cache.get(&fingerprint);

        match classify(record, probe, cached.as_ref()) {
            TargetStep::ProbeFailed { status } => {
                debug!(%fingerprint, page = %record.target, ?status, "probe failed; skipping");
                TargetOutcome::ProbeFailed
            }
            TargetStep::Unchanged => {
                debug!(%fingerprint, page = %record.target, "status unchanged");
                TargetOutcome::Unchanged
            }
            TargetStep::Changed { digest, snapshot } => {
                // Recorded before delivery; a failed delivery evicts it again.
                self.cache.put(fingerprint.clone(), digest);

                match self.notifier.notify(&fingerprint, record, &snapshot).await {
                    DeliveryOutcome::Rotated { .. } => TargetOutcome::Rotated,
                    DeliveryOutcome::Evicted { .. } => TargetOutcome::Evicted,
                }
            }
        }
    }
}
