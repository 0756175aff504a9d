use crate::errors::{AppError, AppResult};
use crate::utils::time::parse_duration;
use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_database")]
    pub database: String,
    /// Expected net worktime per day, as a duration string (e.g. `8h`, `7h30m`).
    #[serde(default = "default_workday_length")]
    pub workday_length: String,
}

fn default_database() -> String {
    Config::database_file().to_string_lossy().to_string()
}

fn default_workday_length() -> String {
    "8h".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            workday_length: default_workday_length(),
        }
    }
}

impl Config {
    /// `~/.overwatcher` (falls back to the current directory without a home).
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".overwatcher")
    }

    pub fn config_file() -> PathBuf {
        Self::config_dir().join("overwatcher.conf")
    }

    pub fn database_file() -> PathBuf {
        Self::config_dir().join("overwatcher.db")
    }

    /// A relative `--db` name lives in the config directory; absolute paths are kept.
    pub fn resolve_database(name: &str) -> String {
        let p = Path::new(name);
        if p.is_absolute() {
            p.to_string_lossy().to_string()
        } else {
            Self::config_dir().join(p).to_string_lossy().to_string()
        }
    }

    /// Load the configuration file, or defaults if it does not exist.
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        Ok(serde_yaml::from_str(&content)?)
    }

    pub fn save_to(&self, path: &Path) -> AppResult<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, serde_yaml::to_string(self)?)?;
        Ok(())
    }

    pub fn workday(&self) -> AppResult<Duration> {
        parse_duration(&self.workday_length).map_err(|_| {
            AppError::Config(format!(
                "invalid workday_length '{}' (expected e.g. 8h)",
                self.workday_length
            ))
        })
    }

    /// Create the config directory, write the config file (unless `is_test`)
    /// and return the database path to initialize.
    pub fn init_all(custom_db: Option<&str>, is_test: bool) -> AppResult<Self> {
        let mut cfg = if is_test {
            Self::default()
        } else {
            Self::load()?
        };

        if let Some(name) = custom_db {
            cfg.database = Self::resolve_database(name);
        }

        if !is_test {
            cfg.save_to(&Self::config_file())?;
        }

        if let Some(parent) = Path::new(&cfg.database).parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        Ok(cfg)
    }
}
