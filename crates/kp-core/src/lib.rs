//! Keyplate core library
//!
//! This crate provides the data model and operations behind the `kp` CLI:
//! parsing, validating, and rendering the `Keyplate.toml` device-secrets
//! configuration that an ESP32 Twilio-notifier firmware is flashed with.

pub mod config;
pub mod error;
pub mod redact;
pub mod render;
pub mod source;
pub mod validate;

pub use config::{DeviceConfig, Field};
pub use error::{ConfigError, Result};
pub use render::HeaderFormat;
pub use validate::{validate, Finding, Problem, Severity, ValidationReport};

/// File name the toolkit looks for when no explicit config path is given.
pub const CONFIG_FILE_NAME: &str = "Keyplate.toml";
