// src/notify/notifier.rs

use tracing::{info, warn};

use crate::notify::transport::WebhookTransport;
use crate::notify::webhook::{DeliveryFailure, WebhookRequest, parse_ack};
use crate::types::{Fingerprint, StatusSnapshot, WatchRecord};
use crate::watch::{ChangeCache, WatchRegistry};

/// What a single notification did to the registration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeliveryOutcome {
    /// Callback acknowledged; the registry now holds `token`.
    Rotated { token: String },
    /// Delivery failed; registry record and cache digest are gone.
    Evicted { reason: DeliveryFailure },
}

/// Sends change notifications and applies the callback's verdict.
///
/// There is no retry: any failure is taken to mean the callback is gone, and
/// the watch is dropped until its owner registers again.
pub struct Notifier<W: WebhookTransport> {
    registry: WatchRegistry,
    cache: ChangeCache,
    transport: W,
    route: String,
}

impl<W: WebhookTransport> Notifier<W> {
    pub fn new(
        registry: WatchRegistry,
        cache: ChangeCache,
        transport: W,
        route: impl Into<String>,
    ) -> Self {
        Self {
            registry,
            cache,
            transport,
            route: route.into(),
        }
    }

    pub async fn notify(
        &self,
        fingerprint: &Fingerprint,
        record: &WatchRecord,
        snapshot: &StatusSnapshot,
    ) -> DeliveryOutcome {
        let request = WebhookRequest::new(record, snapshot, &self.route);

        let verdict = match self.transport.deliver(&request).await {
            Ok(body) => parse_ack(&body),
            Err(e) => Err(DeliveryFailure::from(e)),
        };

        match verdict {
            Ok(token) => {
                self.registry.update_token(fingerprint, token.clone());
                info!(
                    %fingerprint,
                    page = %record.target,
                    playing = snapshot.active,
                    "notification delivered"
                );
                DeliveryOutcome::Rotated { token }
            }
            Err(reason) => {
                self.cache.evict(fingerprint);
                self.registry.evict(fingerprint);
                warn!(
                    %fingerprint,
                    page = %record.target,
                    callback = %record.callback,
                    error = %reason,
                    "notification failed; dropping watch"
                );
                DeliveryOutcome::Evicted { reason }
            }
        }
    }
}
