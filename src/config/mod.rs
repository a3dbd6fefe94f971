use crate::core::advance::TimeUnit;
use crate::errors::{AppError, AppResult};
use crate::ui::messages::warning;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Unit used by `advance <N>` when `--unit` is omitted.
    #[serde(default)]
    pub default_unit: TimeUnit,
    /// Descriptions longer than this are truncated in listings.
    #[serde(default = "default_preview_length")]
    pub preview_length: usize,
    /// File name used when `export --file` points to a directory.
    #[serde(default = "default_export_file_name")]
    pub export_file_name: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}
fn default_preview_length() -> usize {
    120
}
fn default_export_file_name() -> String {
    "dnd-timeline.json".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            default_unit: TimeUnit::default(),
            preview_length: default_preview_length(),
            export_file_name: default_export_file_name(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rcampaign")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rcampaign")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rcampaign.conf")
    }

    /// Return the full path of the SQLite store
    pub fn database_file() -> PathBuf {
        Self::config_dir().join("rcampaign.sqlite")
    }

    /// Load configuration from file, or return defaults if not found.
    ///
    /// An unreadable or malformed file is reported and replaced by defaults.
    pub fn load() -> Self {
        let path = Self::config_file();
        if !path.exists() {
            return Config::default();
        }

        match Self::read_from(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "config file ignored");
                warning(format!(
                    "Ignoring configuration file {}: {}",
                    path.display(),
                    e
                ));
                Config::default()
            }
        }
    }

    pub fn read_from(path: &Path) -> AppResult<Self> {
        let content = fs::read_to_string(path).map_err(|_| AppError::ConfigLoad)?;
        let cfg = serde_yaml::from_str(&content)?;
        Ok(cfg)
    }

    /// Initialize configuration directory, config file and store path.
    ///
    /// Returns the store path. In test mode the config file is left alone.
    pub fn init_all(custom_name: Option<String>, is_test: bool) -> AppResult<PathBuf> {
        let dir = Self::config_dir();

        // Store name: user provided or default
        let db_path = if let Some(name) = custom_name {
            let p = Path::new(&name);
            if p.is_absolute() {
                p.to_path_buf()
            } else {
                dir.join(p)
            }
        } else {
            dir.join("rcampaign.sqlite")
        };

        if !is_test {
            fs::create_dir_all(&dir)?;

            let config = Config {
                database: db_path.to_string_lossy().to_string(),
                ..Config::default()
            };

            let yaml = serde_yaml::to_string(&config)?;
            let mut file = fs::File::create(Self::config_file()).map_err(|_| AppError::ConfigSave)?;
            file.write_all(yaml.as_bytes())?;
        }

        if let Some(parent) = db_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(db_path)
    }
}
