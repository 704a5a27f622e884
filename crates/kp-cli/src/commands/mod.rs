//! Command implementations for the kp CLI

use std::path::{Path, PathBuf};

use eyre::{eyre, Context, Result};

use kp_core::{source, DeviceConfig, CONFIG_FILE_NAME};

mod check;
mod generate;
mod init;
mod show;

pub use check::check;
pub use generate::generate;
pub use init::init;
pub use show::{show, show_json, show_text};

/// Resolve the config path (explicit flag or nearest Keyplate.toml looking
/// upward from the current directory), load it, and overlay `KEYPLATE_*`
/// environment variables.
fn load_config(config_path: Option<&Path>) -> Result<(DeviceConfig, PathBuf)> {
    let path = match config_path {
        Some(path) => path.to_path_buf(),
        None => {
            let cwd = std::env::current_dir().context("failed to determine current directory")?;
            source::find_nearest_config(&cwd).ok_or_else(|| {
                eyre!(
                    "no {} found in {} or any parent directory; run `kp init` first",
                    CONFIG_FILE_NAME,
                    cwd.display()
                )
            })?
        }
    };

    let mut config = DeviceConfig::from_file(&path)
        .context(format!("failed to load config at {}", path.display()))?;
    config.apply_env_overrides();

    Ok((config, path))
}
