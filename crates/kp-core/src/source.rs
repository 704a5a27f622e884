//! Loading and saving Keyplate.toml files
//!
//! File IO, environment-variable overlay, and upward discovery of the
//! nearest `Keyplate.toml`. Precedence is environment over file: the CLI
//! loads the file first and then applies [`DeviceConfig::apply_env_overrides`].

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::{DeviceConfig, Field};
use crate::error::{ConfigError, Result};
use crate::CONFIG_FILE_NAME;

impl DeviceConfig {
    /// Load a DeviceConfig from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let config: Self = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    /// Save this configuration to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        let toml = toml::to_string_pretty(self)?;

        std::fs::write(path, toml).map_err(|source| ConfigError::Write {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), "wrote config");
        Ok(())
    }

    /// Overlay values from `KEYPLATE_*` environment variables.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides_from(|field| std::env::var(field.env_var()).ok());
    }

    /// Overlay values from an arbitrary lookup. Unset fields keep their
    /// file-sourced values.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(Field) -> Option<String>,
    {
        for field in Field::ALL {
            if let Some(value) = lookup(field) {
                debug!(field = %field, "value overridden from environment");
                self.set(field, value);
            }
        }
    }
}

/// Returns the path to the closest Keyplate.toml file, starting from the
/// given directory and looking upwards through parent directories.
pub fn find_nearest_config(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir.to_path_buf();

    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.exists() {
            return Some(candidate);
        }

        // Go up one directory
        if !current.pop() {
            return None;
        }
    }
}
