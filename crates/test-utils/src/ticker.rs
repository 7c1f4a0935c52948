use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use playwatch::engine::{PauseKind, Ticker};

/// A ticker that records requested pauses and returns at once.
///
/// It still yields to the scheduler, so a forever-loop driven by it can be
/// bounded with `tokio::time::timeout`.
#[derive(Clone, Default)]
pub struct RecordingTicker {
    pauses: Arc<Mutex<Vec<(PauseKind, Duration)>>>,
}

impl RecordingTicker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pauses(&self) -> Vec<(PauseKind, Duration)> {
        self.pauses.lock().unwrap().clone()
    }

    pub fn count(&self, kind: PauseKind) -> usize {
        self.pauses
            .lock()
            .unwrap()
            .iter()
            .filter(|(k, _)| *k == kind)
            .count()
    }
}

impl Ticker for RecordingTicker {
    fn pause(
        &self,
        kind: PauseKind,
        delay: Duration,
    ) -> Pin<Box<dyn Future<Output = ()> + Send + '_>> {
        self.pauses.lock().unwrap().push((kind, delay));
        Box::pin(tokio::task::yield_now())
    }
}
