// src/export/fs_utils.rs

use crate::errors::{AppError, AppResult};
use crate::ui::messages::{info, warning};
use crate::utils::path::expand_tilde;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

/// Check whether a file may be created or overwritten.
///
/// - file does not exist → Ok
/// - file exists and `force` → Ok
/// - file exists and no `force` → ask on stdin, anything but y/yes cancels
pub(crate) fn ensure_writable(path: &Path, force: bool) -> AppResult<()> {
    if !path.exists() || force {
        return Ok(());
    }

    warning(format!("The file '{}' already exists.", path.display()));

    print!("Overwrite? [y/N]: ");
    io::stdout().flush().ok();

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    let ans = answer.trim().to_ascii_lowercase();

    if ans == "y" || ans == "yes" {
        info("Existing file will be overwritten.");
        Ok(())
    } else {
        Err(AppError::Cancelled(format!(
            "existing file '{}' not overwritten",
            path.display()
        )))
    }
}

/// Expand `~/` and make sure the parent directory exists.
pub(crate) fn prepare_output(file: &str) -> AppResult<PathBuf> {
    let path = expand_tilde(file);

    if path.is_dir() {
        return Err(AppError::Export(format!(
            "output path is a directory: {}",
            path.display()
        )));
    }

    if let Some(dir) = path.parent()
        && !dir.as_os_str().is_empty()
        && !dir.exists()
    {
        fs::create_dir_all(dir)?;
    }

    Ok(path)
}
