// tests/config.rs

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use playwatch::config::{ConfigFile, load_and_validate, parse_duration, resolve_config};
use playwatch::engine::PollOptions;
use playwatch::errors::PlaywatchError;
use playwatch_test_utils::builders::ConfigFileBuilder;

fn write_config(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    file
}

#[test]
fn empty_file_yields_defaults() {
    let file = write_config("");

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg, ConfigFile::defaults());
    assert_eq!(cfg.server.port, 5555);
    assert_eq!(cfg.poll.sweep_delay, Duration::from_secs(30));
    assert_eq!(cfg.poll.target_delay, Duration::from_secs(3));
    assert_eq!(cfg.http.route_header, "Steam");
    assert_eq!(cfg.http.request_timeout, None);
    assert_eq!(PollOptions::from(&cfg.poll), PollOptions::default());
}

#[test]
fn full_file_is_parsed() {
    let file = write_config(
        r#"
[server]
bind = "127.0.0.1"
port = 8080

[poll]
sweep_delay = "1m"
target_delay = "250ms"

[http]
route_header = "Profile"
user_agent = "playwatch-test"
request_timeout = "10s"
"#,
    );

    let cfg = load_and_validate(file.path()).unwrap();

    assert_eq!(cfg.server.socket_addr().unwrap().to_string(), "127.0.0.1:8080");
    assert_eq!(cfg.poll.sweep_delay, Duration::from_secs(60));
    assert_eq!(cfg.poll.target_delay, Duration::from_millis(250));
    assert_eq!(cfg.http.route_header, "Profile");
    assert_eq!(cfg.http.user_agent.as_deref(), Some("playwatch-test"));
    assert_eq!(cfg.http.request_timeout, Some(Duration::from_secs(10)));
}

#[test]
fn bad_duration_is_a_config_error() {
    let file = write_config("[poll]\nsweep_delay = \"soon\"\n");

    match load_and_validate(file.path()) {
        Err(PlaywatchError::ConfigError(msg)) => assert!(msg.contains("[poll].sweep_delay")),
        other => panic!("Expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn zero_sweep_delay_is_rejected() {
    let raw = ConfigFileBuilder::new().sweep_delay("0s").raw();

    match ConfigFile::try_from(raw) {
        Err(PlaywatchError::ConfigError(msg)) => assert!(msg.contains("greater than zero")),
        other => panic!("Expected ConfigError, got: {other:?}"),
    }
}

#[test]
fn zero_target_delay_is_allowed() {
    let cfg = ConfigFileBuilder::new().target_delay("0ms").build();
    assert_eq!(cfg.poll.target_delay, Duration::ZERO);
}

#[test]
fn invalid_bind_and_route_are_rejected() {
    let raw = ConfigFileBuilder::new().bind("localhost-ish").raw();
    assert!(matches!(ConfigFile::try_from(raw), Err(PlaywatchError::ConfigError(_))));

    let raw = ConfigFileBuilder::new().route_header("  ").raw();
    assert!(matches!(ConfigFile::try_from(raw), Err(PlaywatchError::ConfigError(_))));

    let raw = ConfigFileBuilder::new().request_timeout("0s").raw();
    assert!(matches!(ConfigFile::try_from(raw), Err(PlaywatchError::ConfigError(_))));
}

#[test]
fn unknown_keys_are_a_toml_error() {
    let file = write_config("[poll]\nsweep_dealy = \"30s\"\n");

    assert!(matches!(load_and_validate(file.path()), Err(PlaywatchError::TomlError(_))));
}

#[test]
fn explicit_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    assert!(matches!(resolve_config(Some(missing.as_path())), Err(PlaywatchError::IoError(_))));
}

#[test]
fn explicit_file_is_used() {
    let file = write_config("[server]\nport = 9000\n");

    let cfg = resolve_config(Some(file.path())).unwrap();

    assert_eq!(cfg.server.port, 9000);
}

#[test]
fn duration_parsing() {
    assert_eq!(parse_duration("3s"), Ok(Duration::from_secs(3)));
    assert_eq!(parse_duration(" 250ms "), Ok(Duration::from_millis(250)));
    assert_eq!(parse_duration("2h"), Ok(Duration::from_secs(7200)));
    assert_eq!(parse_duration("5M"), Ok(Duration::from_secs(300)));
    assert!(parse_duration("").is_err());
    assert!(parse_duration("10").is_err());
    assert!(parse_duration("s").is_err());
    assert!(parse_duration("3d").is_err());
}
