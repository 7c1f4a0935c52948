// src/config/model.rs

use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use serde::Deserialize;

use crate::errors::{PlaywatchError, Result};

/// Configuration as read from a TOML file, before validation.
///
/// ```toml
/// [server]
/// bind = "0.0.0.0"
/// port = 5555
///
/// [poll]
/// sweep_delay = "30s"
/// target_delay = "3s"
///
/// [http]
/// route_header = "Steam"
/// user_agent = "playwatch/0.1"
/// request_timeout = "20s"
/// ```
///
/// All sections are optional and default to the values above (no user agent
/// override and no request timeout).
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfigFile {
    #[serde(default)]
    pub server: ServerSection,

    #[serde(default)]
    pub poll: RawPollSection,

    #[serde(default)]
    pub http: RawHttpSection,
}

/// `[server]` section.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ServerSection {
    #[serde(default = "default_bind")]
    pub bind: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_bind() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    5555
}

impl ServerSection {
    /// Address the registration API listens on.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        let ip: IpAddr = self.bind.trim().parse().map_err(|e| {
            PlaywatchError::ConfigError(format!(
                "[server].bind '{}' is not an IP address: {e}",
                self.bind
            ))
        })?;
        Ok(SocketAddr::new(ip, self.port))
    }
}

impl Default for ServerSection {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            port: default_port(),
        }
    }
}

/// `[poll]` section, durations still as strings like `"30s"`.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawPollSection {
    #[serde(default = "default_sweep_delay")]
    pub sweep_delay: String,

    #[serde(default = "default_target_delay")]
    pub target_delay: String,
}

fn default_sweep_delay() -> String {
    "30s".to_string()
}

fn default_target_delay() -> String {
    "3s".to_string()
}

impl Default for RawPollSection {
    fn default() -> Self {
        Self {
            sweep_delay: default_sweep_delay(),
            target_delay: default_target_delay(),
        }
    }
}

/// `[http]` section.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawHttpSection {
    /// Value of the `API-Route` header on every notification.
    #[serde(default = "default_route_header")]
    pub route_header: String,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// If unset, probes and webhooks wait as long as the transport allows.
    #[serde(default)]
    pub request_timeout: Option<String>,
}

fn default_route_header() -> String {
    "Steam".to_string()
}

impl Default for RawHttpSection {
    fn default() -> Self {
        Self {
            route_header: default_route_header(),
            user_agent: None,
            request_timeout: None,
        }
    }
}

/// Validated configuration used by the rest of the application.
///
/// Build one through `ConfigFile::try_from(raw)` or
/// [`load_and_validate`](crate::config::load_and_validate).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigFile {
    pub server: ServerSection,
    pub poll: PollSettings,
    pub http: HttpSettings,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollSettings {
    pub sweep_delay: Duration,
    pub target_delay: Duration,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpSettings {
    pub route_header: String,
    pub user_agent: Option<String>,
    pub request_timeout: Option<Duration>,
}

impl ConfigFile {
    pub(crate) fn new_unchecked(
        server: ServerSection,
        poll: PollSettings,
        http: HttpSettings,
    ) -> Self {
        Self { server, poll, http }
    }

    /// Built-in defaults, identical to validating an empty file.
    pub fn defaults() -> Self {
        Self::new_unchecked(
            ServerSection::default(),
            PollSettings {
                sweep_delay: Duration::from_secs(30),
                target_delay: Duration::from_secs(3),
            },
            HttpSettings {
                route_header: default_route_header(),
                user_agent: None,
                request_timeout: None,
            },
        )
    }
}
