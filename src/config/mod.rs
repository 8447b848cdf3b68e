use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Rows created by a fresh ledger or a reset
    #[serde(default = "default_days_in_month")]
    pub days_in_month: u32,
    /// Default export file name
    #[serde(default = "default_export_file")]
    pub export_file: String,
    /// Decimal places shown in the grid and the summary
    #[serde(default = "default_decimals")]
    pub decimals: usize,
    /// Optional suffix shown after payment amounts (e.g. "€")
    #[serde(default)]
    pub currency: String,
    #[serde(default = "default_separator_char")]
    pub separator_char: String,
}

/// Field names expected in a complete configuration file.
const FIELDS: [&str; 5] = [
    "days_in_month",
    "export_file",
    "decimals",
    "currency",
    "separator_char",
];

fn default_days_in_month() -> u32 {
    31
}
fn default_export_file() -> String {
    "DID_monthly_records.csv".to_string()
}
fn default_decimals() -> usize {
    2
}
fn default_separator_char() -> String {
    "-".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            days_in_month: default_days_in_month(),
            export_file: default_export_file(),
            decimals: default_decimals(),
            currency: String::new(),
            separator_char: default_separator_char(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("didledger")
        } else {
            let home = dirs::home_dir()
                .or_else(|| env::var("HOME").ok().map(PathBuf::from))
                .unwrap_or_else(|| PathBuf::from("."));
            home.join(".didledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("didledger.conf")
    }

    /// Load configuration from `path`, or return defaults if not found
    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            log::debug!("no config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg: Config = serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {e}", path.display())))?;

        if cfg.days_in_month == 0 {
            return Err(AppError::Config(
                "days_in_month must be greater than zero".into(),
            ));
        }
        Ok(cfg)
    }

    /// Write this configuration to `path`, creating parent directories.
    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(dir) = path.parent()
            && !dir.as_os_str().is_empty()
        {
            fs::create_dir_all(dir)?;
        }

        let yaml = serde_yaml::to_string(self).map_err(|_| AppError::ConfigSave)?;
        let mut file = fs::File::create(path)?;
        file.write_all(yaml.as_bytes())?;
        Ok(())
    }

    /// Names of the known fields absent from a YAML document.
    pub fn missing_fields(content: &str) -> AppResult<Vec<&'static str>> {
        let yaml: Value =
            serde_yaml::from_str(content).map_err(|e| AppError::Config(e.to_string()))?;

        let Some(map) = yaml.as_mapping() else {
            return Ok(FIELDS.to_vec());
        };

        Ok(FIELDS
            .iter()
            .copied()
            .filter(|f| !map.contains_key(Value::String((*f).to_string())))
            .collect())
    }
}
