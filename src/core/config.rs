use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::{success, warning};
use std::fs;
use std::path::Path;
use std::process::Command;

pub struct ConfigLogic;

impl ConfigLogic {
    pub fn print(cfg: &Config) -> AppResult<()> {
        let yaml = serde_yaml::to_string(cfg).map_err(|e| AppError::Config(e.to_string()))?;
        println!("📄 Current configuration:\n");
        println!("{}", yaml);
        Ok(())
    }

    /// Report the fields missing from the file on disk (they fall back to
    /// their defaults at load time).
    pub fn check(path: &Path) -> AppResult<Vec<&'static str>> {
        if !path.exists() {
            warning(format!(
                "Configuration file not found: {} (defaults in use)",
                path.display()
            ));
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let missing = Config::missing_fields(&content)?;

        if missing.is_empty() {
            success("Configuration file is complete.");
        } else {
            for field in &missing {
                warning(format!("Missing field '{field}' (default value in use)"));
            }
        }
        Ok(missing)
    }

    pub fn edit(path: &Path, editor: &Option<String>) -> AppResult<()> {
        let default_editor = std::env::var("EDITOR")
            .or_else(|_| std::env::var("VISUAL"))
            .unwrap_or_else(|_| {
                if cfg!(target_os = "windows") {
                    "notepad".to_string()
                } else {
                    "nano".to_string()
                }
            });

        let editor_to_use = editor.clone().unwrap_or_else(|| default_editor.clone());

        match Command::new(&editor_to_use).arg(path).status() {
            Ok(s) if s.success() => {
                success(format!(
                    "Configuration file edited successfully using '{}'",
                    editor_to_use
                ));
                Ok(())
            }
            Ok(_) | Err(_) if editor_to_use != default_editor => {
                warning(format!(
                    "Editor '{}' not available, falling back to '{}'",
                    editor_to_use, default_editor
                ));
                Command::new(&default_editor)
                    .arg(path)
                    .status()
                    .map_err(|e| AppError::Config(e.to_string()))
                    .and_then(|s| {
                        if s.success() {
                            Ok(())
                        } else {
                            Err(AppError::Config(format!(
                                "editor '{}' exited with {}",
                                default_editor, s
                            )))
                        }
                    })
            }
            Ok(s) => Err(AppError::Config(format!(
                "editor '{}' exited with {}",
                editor_to_use, s
            ))),
            Err(e) => Err(AppError::Config(e.to_string())),
        }
    }
}
