#![allow(dead_code)]

use playwatch::config::{ConfigFile, RawConfigFile};
use playwatch::types::StatusSnapshot;

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile::default(),
        }
    }

    pub fn port(mut self, port: u16) -> Self {
        self.config.server.port = port;
        self
    }

    pub fn bind(mut self, bind: &str) -> Self {
        self.config.server.bind = bind.to_string();
        self
    }

    pub fn sweep_delay(mut self, delay: &str) -> Self {
        self.config.poll.sweep_delay = delay.to_string();
        self
    }

    pub fn target_delay(mut self, delay: &str) -> Self {
        self.config.poll.target_delay = delay.to_string();
        self
    }

    pub fn route_header(mut self, route: &str) -> Self {
        self.config.http.route_header = route.to_string();
        self
    }

    pub fn request_timeout(mut self, timeout: &str) -> Self {
        self.config.http.request_timeout = Some(timeout.to_string());
        self
    }

    pub fn raw(self) -> RawConfigFile {
        self.config
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Snapshot of a profile currently in a game.
pub fn playing(label: &str, link: &str) -> StatusSnapshot {
    StatusSnapshot {
        reachable: true,
        active: true,
        label: label.to_string(),
        link: link.to_string(),
        icon: format!("{link}/icon.jpg"),
    }
}

/// Snapshot of a reachable profile that is not in a game.
pub fn idle() -> StatusSnapshot {
    StatusSnapshot {
        reachable: true,
        ..StatusSnapshot::default()
    }
}
