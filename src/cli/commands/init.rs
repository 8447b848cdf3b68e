use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use std::path::Path;

/// Handle the `init` command
///
/// Creates the config directory (if missing) and writes a configuration
/// file with default values. An existing file is kept unless `force`.
pub fn handle(path: &Path, force: bool) -> AppResult<()> {
    info("Initializing didledger…");
    info(format!("Config file : {}", path.display()));

    if path.exists() && !force {
        warning("Configuration file already exists, keeping it (use --force to reset).");
        return Ok(());
    }

    Config::default().save_to(path)?;

    success("didledger initialization completed!");
    Ok(())
}
