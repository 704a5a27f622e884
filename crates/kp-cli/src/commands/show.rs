//! Command implementation for displaying the resolved configuration

use std::fmt::Write as _;
use std::path::Path;

use eyre::{Context, Result};

use kp_core::{redact, DeviceConfig, Field};

use super::load_config;

/// Print the resolved (file + environment) configuration with secrets
/// masked, as aligned text or JSON.
pub fn show(config_path: Option<&Path>, json: bool) -> Result<()> {
    let (config, path) = load_config(config_path)?;

    if json {
        println!("{}", show_json(&config)?);
    } else {
        print!("{}", show_text(&config, &path));
    }

    Ok(())
}

/// The plain-text rendering `show` prints. Secrets are masked.
pub fn show_text(config: &DeviceConfig, path: &Path) -> String {
    let mut out = String::new();
    writeln!(out, "# resolved from {}", path.display()).unwrap();
    for field in Field::ALL {
        writeln!(
            out,
            "{:<20} = {}",
            field.export_name(),
            redact::redacted(field, config.get(field))
        )
        .unwrap();
    }
    out
}

/// The JSON rendering for `show --json`. Secrets are masked.
pub fn show_json(config: &DeviceConfig) -> Result<String> {
    let mut map = serde_json::Map::new();
    for field in Field::ALL {
        map.insert(
            field.export_name().to_string(),
            serde_json::Value::String(redact::redacted(field, config.get(field))),
        );
    }
    serde_json::to_string_pretty(&serde_json::Value::Object(map))
        .context("failed to serialize config to JSON")
}
