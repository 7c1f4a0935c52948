// src/notify/mod.rs

//! Webhook delivery.
//!
//! - [`webhook`] defines the outbound form and parses acknowledgments.
//! - [`transport`] provides the `WebhookTransport` trait and the reqwest
//!   implementation used in production; tests swap in a scripted fake.
//! - [`notifier`] sends a notification and either rotates the token or
//!   evicts the watch.

pub mod notifier;
pub mod transport;
pub mod webhook;

pub use notifier::{DeliveryOutcome, Notifier};
pub use transport::{HttpTransport, TransportError, WebhookTransport};
pub use webhook::{DeliveryFailure, WebhookRequest, parse_ack};
