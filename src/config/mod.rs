//! Report configuration
//!
//! Field overrides, extra hidden names, and the section/table layout of a report, loaded from
//! `report.{toml,yml,yaml,json}` or taken from the built-in `default_config.yml`.

#[expect(clippy::module_inception, reason = "Config lives in its own file like the other modules")]
mod config;

pub use config::{Config, DEFAULT_CONFIG_YAML};
