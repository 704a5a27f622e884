//! Command implementation for initializing a Keyplate.toml template

use std::path::Path;

use eyre::{bail, Context, Result};
use tracing::info;

use kp_core::{DeviceConfig, CONFIG_FILE_NAME};

/// Write the all-placeholder template. `path` may be a directory or an
/// explicit `.toml` file path.
pub fn init(path: &Path, force: bool) -> Result<()> {
    let target_path = if path.extension().is_some_and(|ext| ext == "toml") {
        path.to_path_buf()
    } else {
        std::fs::create_dir_all(path).context(format!(
            "failed to create directory at {}",
            path.display()
        ))?;
        path.join(CONFIG_FILE_NAME)
    };

    if target_path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            target_path.display()
        );
    }

    DeviceConfig::template()
        .save_to_file(&target_path)
        .context(format!(
            "failed to write template to {}",
            target_path.display()
        ))?;

    info!(path = %target_path.display(), "template written");
    println!(
        "Created {} with placeholder values. Fill it in, then run `kp check`.",
        target_path.display()
    );

    Ok(())
}
