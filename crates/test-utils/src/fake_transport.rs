use std::collections::HashMap;
use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use playwatch::notify::{TransportError, WebhookRequest, WebhookTransport};
use playwatch::types::{ChangeDigest, Fingerprint};
use playwatch::watch::ChangeCache;

/// A fake webhook transport that:
/// - records every request it was handed
/// - answers each callback URL with whatever body was last scripted for it.
///
/// Unscripted callbacks fail with a send error.
///
/// With [`FakeTransport::observe_cache`] it also captures the cached digest
/// for each request's fingerprint at the moment of delivery.
#[derive(Clone, Default)]
pub struct FakeTransport {
    responses: Arc<Mutex<HashMap<String, Result<String, TransportError>>>>,
    delivered: Arc<Mutex<Vec<WebhookRequest>>>,
    observed: Arc<Mutex<Option<ChangeCache>>>,
    seen_digests: Arc<Mutex<Vec<Option<ChangeDigest>>>>,
}

impl FakeTransport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&self, callback: &str, response: Result<String, TransportError>) {
        self.responses
            .lock()
            .unwrap()
            .insert(callback.to_string(), response);
    }

    /// Script a well-formed acknowledgment handing out `refresh`.
    pub fn ack(&self, callback: &str, refresh: &str) {
        self.set(
            callback,
            Ok(format!(r#"{{"success":true,"data":{{"refresh":"{refresh}"}}}}"#)),
        );
    }

    pub fn delivered(&self) -> Vec<WebhookRequest> {
        self.delivered.lock().unwrap().clone()
    }

    pub fn observe_cache(&self, cache: ChangeCache) {
        *self.observed.lock().unwrap() = Some(cache);
    }

    /// Cache contents seen by each delivery, in delivery order.
    pub fn digests_at_delivery(&self) -> Vec<Option<ChangeDigest>> {
        self.seen_digests.lock().unwrap().clone()
    }
}

impl WebhookTransport for FakeTransport {
    fn deliver<'a>(
        &'a self,
        request: &'a WebhookRequest,
    ) -> Pin<Box<dyn Future<Output = Result<String, TransportError>> + Send + 'a>> {
        self.delivered.lock().unwrap().push(request.clone());

        if let Some(cache) = self.observed.lock().unwrap().as_ref() {
            let page = request.field("page").unwrap_or_default();
            let fingerprint = Fingerprint::of(page, &request.callback);
            self.seen_digests.lock().unwrap().push(cache.get(&fingerprint));
        }

        let response = self
            .responses
            .lock()
            .unwrap()
            .get(&request.callback)
            .cloned()
            .unwrap_or_else(|| {
                Err(TransportError::Send(format!(
                    "no scripted response for {}",
                    request.callback
                )))
            });

        Box::pin(async move { response })
    }
}
