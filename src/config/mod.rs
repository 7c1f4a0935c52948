// src/config/mod.rs

//! Configuration loading and validation.
//!
//! `model` holds the serde types, `loader` reads TOML from disk, and
//! `validate` turns a `RawConfigFile` into a checked `ConfigFile`.

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{default_config_path, load_and_validate, load_from_path, resolve_config};
pub use model::{
    ConfigFile, HttpSettings, PollSettings, RawConfigFile, RawHttpSection, RawPollSection,
    ServerSection,
};
pub use validate::parse_duration;
