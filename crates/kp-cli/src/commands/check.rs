//! Command implementation for validating a Keyplate.toml

use std::path::Path;

use eyre::Result;
use tracing::debug;

use kp_core::validate;

use super::load_config;

/// Validate the config and print the findings. Returns whether the check
/// passed: errors always fail it, warnings fail it only under `--strict`.
pub fn check(config_path: Option<&Path>, strict: bool) -> Result<bool> {
    let (config, path) = load_config(config_path)?;
    debug!(path = %path.display(), strict, "checking config");

    let report = validate(&config);

    for finding in report.findings() {
        eprintln!("{finding}");
    }

    if report.is_clean() {
        println!("{}: all values pass validation", path.display());
        return Ok(true);
    }

    let errors = report.error_count();
    let warnings = report.warning_count();
    eprintln!(
        "{}: {} error(s), {} warning(s)",
        path.display(),
        errors,
        warnings
    );

    Ok(errors == 0 && !(strict && warnings > 0))
}
