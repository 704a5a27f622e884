//! Header generation
//!
//! Renders a configuration into the artifact firmware builds include: a C
//! header of `#define`s or a Rust module of `pub const` strings. Constant
//! names come from [`Field::export_name`] and are emitted in `Field::ALL`
//! order; consumers bind by exactly these names.

use std::fmt::Write as _;
use std::path::Path;

use tracing::debug;

use crate::config::{DeviceConfig, Field};
use crate::error::{ConfigError, Result};

/// Output language for the generated header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeaderFormat {
    /// `secrets.h`: `#define NAME "value"`
    C,
    /// `secrets.rs`: `pub const NAME: &str = "value";`
    Rust,
}

impl HeaderFormat {
    /// Conventional file name for this format.
    pub fn default_file_name(self) -> &'static str {
        match self {
            HeaderFormat::C => "secrets.h",
            HeaderFormat::Rust => "secrets.rs",
        }
    }
}

/// Render the configuration as header source text.
///
/// `source` names the config file in the generated-file banner when known.
pub fn render(config: &DeviceConfig, format: HeaderFormat, source: Option<&Path>) -> String {
    let mut out = String::new();
    let origin = source
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "Keyplate config".to_string());

    writeln!(out, "// Generated by kp from {origin}. Do not edit by hand.").unwrap();

    match format {
        HeaderFormat::C => {
            writeln!(out, "#pragma once").unwrap();
            writeln!(out).unwrap();
            for field in Field::ALL {
                writeln!(
                    out,
                    "#define {} \"{}\"",
                    field.export_name(),
                    escape_c(config.get(field))
                )
                .unwrap();
            }
        }
        HeaderFormat::Rust => {
            writeln!(out).unwrap();
            for field in Field::ALL {
                writeln!(
                    out,
                    "pub const {}: &str = \"{}\";",
                    field.export_name(),
                    escape_rust(config.get(field))
                )
                .unwrap();
            }
        }
    }

    out
}

/// Render and write the header, creating parent directories as needed.
pub fn write_header(
    config: &DeviceConfig,
    format: HeaderFormat,
    source: Option<&Path>,
    out_path: &Path,
) -> Result<()> {
    let text = render(config, format, source);

    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|source| ConfigError::Write {
                path: out_path.to_path_buf(),
                source,
            })?;
        }
    }

    std::fs::write(out_path, text).map_err(|source| ConfigError::Write {
        path: out_path.to_path_buf(),
        source,
    })?;

    debug!(path = %out_path.display(), "wrote header");
    Ok(())
}

/// Escape a value for a C string literal. Control bytes use octal escapes;
/// `\xNN` is avoided because a following hex character would extend it.
fn escape_c(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\{:03o}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}

/// Escape a value for a Rust string literal.
fn escape_rust(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c as u32 == 0x7f => {
                let _ = write!(out, "\\u{{{:x}}}", c as u32);
            }
            c => out.push(c),
        }
    }
    out
}
