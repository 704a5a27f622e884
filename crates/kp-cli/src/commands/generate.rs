//! Command implementation for generating the secrets header

use std::path::Path;

use eyre::{bail, Context, Result};
use tracing::debug;

use kp_core::{render, validate, HeaderFormat};

use super::load_config;

/// Validate, then render the header to `output` or stdout. Validation
/// errors abort generation; warnings are printed and generation proceeds.
pub fn generate(
    config_path: Option<&Path>,
    format: HeaderFormat,
    output: Option<&Path>,
) -> Result<()> {
    let (config, path) = load_config(config_path)?;
    debug!(path = %path.display(), ?format, "generating header");

    let report = validate(&config);
    for finding in report.findings() {
        eprintln!("{finding}");
    }
    if report.has_errors() {
        bail!(
            "refusing to generate from {}: {} validation error(s)",
            path.display(),
            report.error_count()
        );
    }

    match output {
        Some(out_path) => {
            // `--output include/` picks the conventional file name.
            let out_path = if out_path.is_dir() {
                out_path.join(format.default_file_name())
            } else {
                out_path.to_path_buf()
            };
            let out_path = out_path.as_path();
            render::write_header(&config, format, Some(&path), out_path).context(format!(
                "failed to write header to {}",
                out_path.display()
            ))?;
            println!("Wrote {}", out_path.display());
        }
        None => {
            print!("{}", render::render(&config, format, Some(&path)));
        }
    }

    Ok(())
}
