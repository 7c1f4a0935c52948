use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use playwatch::probe::{ProbeError, ProbeOutcome, ProbeResult, Prober};
use playwatch::types::StatusSnapshot;

/// A fake prober that:
/// - answers each target with whatever was last scripted for it
/// - records every target it was asked to probe, in order.
///
/// Unscripted targets fail with a transport error.
#[derive(Clone, Default)]
pub struct FakeProber {
    responses: Arc<Mutex<HashMap<String, ProbeResult>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl FakeProber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Script the result for `target` until it is scripted again.
    pub fn set(&self, target: &str, result: ProbeResult) {
        self.responses
            .lock()
            .unwrap()
            .insert(target.to_string(), result);
    }

    /// Script a 200 response carrying `snapshot`.
    pub fn set_snapshot(&self, target: &str, snapshot: StatusSnapshot) {
        self.set(
            target,
            Ok(ProbeOutcome {
                status: 200,
                snapshot,
            }),
        );
    }

    /// Script a non-200 response.
    pub fn set_status(&self, target: &str, status: u16) {
        self.set(
            target,
            Ok(ProbeOutcome {
                status,
                snapshot: StatusSnapshot::unreachable(),
            }),
        );
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Prober for FakeProber {
    fn probe<'a>(
        &'a self,
        target: &'a str,
    ) -> Pin<Box<dyn Future<Output = ProbeResult> + Send + 'a>> {
        self.calls.lock().unwrap().push(target.to_string());

        let result = self
            .responses
            .lock()
            .unwrap()
            .get(target)
            .cloned()
            .unwrap_or_else(|| Err(ProbeError::Transport(format!("no scripted response for {target}"))));

        Box::pin(async move { result })
    }
}
