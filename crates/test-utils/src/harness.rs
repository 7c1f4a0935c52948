use playwatch::engine::{PollCycle, PollOptions};
use playwatch::notify::Notifier;
use playwatch::types::{Fingerprint, WatchRecord};
use playwatch::watch::{ChangeCache, WatchRegistry};

use crate::fake_prober::FakeProber;
use crate::fake_transport::FakeTransport;
use crate::ticker::RecordingTicker;

pub const ROUTE: &str = "Steam";

/// A poll cycle wired to fakes, with handles on every shared piece.
pub struct PollHarness {
    pub registry: WatchRegistry,
    pub cache: ChangeCache,
    pub prober: FakeProber,
    pub transport: FakeTransport,
    pub ticker: RecordingTicker,
    pub cycle: PollCycle<FakeProber, FakeTransport, RecordingTicker>,
}

impl PollHarness {
    pub fn new() -> Self {
        Self::with_options(PollOptions::default())
    }

    pub fn with_options(options: PollOptions) -> Self {
        let registry = WatchRegistry::new();
        let cache = ChangeCache::new();
        let prober = FakeProber::new();
        let transport = FakeTransport::new();
        let ticker = RecordingTicker::new();

        let notifier = Notifier::new(registry.clone(), cache.clone(), transport.clone(), ROUTE);
        let cycle = PollCycle::new(
            registry.clone(),
            cache.clone(),
            prober.clone(),
            notifier,
            ticker.clone(),
            options,
        );

        Self {
            registry,
            cache,
            prober,
            transport,
            ticker,
            cycle,
        }
    }

    /// Register a watch, panicking on invalid input.
    pub fn watch(&self, target: &str, callback: &str, token: &str) -> Fingerprint {
        self.registry
            .register(target, callback, token)
            .expect("valid registration");
        Fingerprint::of(target, callback)
    }

    pub fn record(&self, fingerprint: &Fingerprint) -> Option<WatchRecord> {
        self.registry.get(fingerprint)
    }
}

impl Default for PollHarness {
    fn default() -> Self {
        Self::new()
    }
}
