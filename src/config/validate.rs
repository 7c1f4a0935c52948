// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{ConfigFile, HttpSettings, PollSettings, RawConfigFile};
use crate::errors::{PlaywatchError, Result};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = PlaywatchError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_server(&raw)?;
        let poll = validate_poll(&raw)?;
        let http = validate_http(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.server, poll, http))
    }
}

fn validate_server(cfg: &RawConfigFile) -> Result<()> {
    cfg.server.socket_addr().map(|_| ())
}

fn validate_poll(cfg: &RawConfigFile) -> Result<PollSettings> {
    let sweep_delay = duration_field("[poll].sweep_delay", &cfg.poll.sweep_delay)?;
    let target_delay = duration_field("[poll].target_delay", &cfg.poll.target_delay)?;

    // A zero sweep delay would turn an empty registry into a busy loop.
    if sweep_delay.is_zero() {
        return Err(PlaywatchError::ConfigError(
            "[poll].sweep_delay must be greater than zero".to_string(),
        ));
    }

    Ok(PollSettings {
        sweep_delay,
        target_delay,
    })
}

fn validate_http(cfg: &RawConfigFile) -> Result<HttpSettings> {
    let route_header = cfg.http.route_header.trim();
    if route_header.is_empty() {
        return Err(PlaywatchError::ConfigError(
            "[http].route_header must not be empty".to_string(),
        ));
    }

    let request_timeout = match cfg.http.request_timeout.as_deref() {
        Some(s) => {
            let timeout = duration_field("[http].request_timeout", s)?;
            if timeout.is_zero() {
                return Err(PlaywatchError::ConfigError(
                    "[http].request_timeout must be greater than zero".to_string(),
                ));
            }
            Some(timeout)
        }
        None => None,
    };

    let user_agent = cfg
        .http
        .user_agent
        .as_deref()
        .map(str::trim)
        .filter(|ua| !ua.is_empty())
        .map(str::to_string);

    Ok(HttpSettings {
        route_header: route_header.to_string(),
        user_agent,
        request_timeout,
    })
}

fn duration_field(field: &str, value: &str) -> Result<Duration> {
    parse_duration(value).map_err(|e| PlaywatchError::ConfigError(format!("{field}: {e}")))
}

/// Parse a simple duration string like `"3s"`, `"250ms"`, `"1m"`, `"2h"`.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    if s.is_empty() {
        return Err("empty duration string".to_string());
    }

    let idx = s
        .chars()
        .position(|c| !c.is_ascii_digit())
        .ok_or_else(|| format!("duration '{s}' is missing a unit (ms, s, m or h)"))?;

    let (num_part, unit_part) = s.split_at(idx);
    let value: u64 = num_part
        .parse()
        .map_err(|e| format!("invalid duration number '{num_part}': {e}"))?;

    match unit_part.trim().to_lowercase().as_str() {
        "ms" => Ok(Duration::from_millis(value)),
        "s" => Ok(Duration::from_secs(value)),
        "m" => Ok(Duration::from_secs(value.saturating_mul(60))),
        "h" => Ok(Duration::from_secs(value.saturating_mul(60 * 60))),
        unit => Err(format!(
            "unsupported duration unit '{unit}'; expected ms, s, m, or h"
        )),
    }
}
