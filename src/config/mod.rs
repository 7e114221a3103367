use crate::client::DEFAULT_API_BASE_URL;
use crate::errors::{AppError, AppResult};
use crate::utils::path::expand_tilde;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

pub mod credentials; // use submodule at src/config/credentials.rs

pub use credentials::Credentials;

/// Environment variable overriding the configuration directory.
pub const HOME_ENV: &str = "RCLUBLEDGER_HOME";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_ledger")]
    pub ledger: String,
    #[serde(default = "default_fetch_limit")]
    pub fetch_limit: usize,
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
}

fn default_ledger() -> String {
    Config::default_ledger_file().to_string_lossy().to_string()
}
fn default_fetch_limit() -> usize {
    500
}
fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}
fn default_preview_rows() -> usize {
    5
}

impl Default for Config {
    fn default() -> Self {
        Self {
            ledger: default_ledger(),
            fetch_limit: default_fetch_limit(),
            api_base_url: default_api_base_url(),
            preview_rows: default_preview_rows(),
        }
    }
}

impl Config {
    /// Return the standard configuration directory depending on the platform
    pub fn config_dir() -> PathBuf {
        if let Ok(custom) = env::var(HOME_ENV)
            && !custom.trim().is_empty()
        {
            return PathBuf::from(custom);
        }

        if cfg!(target_os = "windows") {
            let appdata = env::var("APPDATA").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(appdata).join("rclubledger")
        } else {
            let home = env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".rclubledger")
        }
    }

    /// Return the full path of the config file
    pub fn config_file() -> PathBuf {
        Self::config_dir().join("rclubledger.conf")
    }

    /// Default location of the ledger CSV
    pub fn default_ledger_file() -> PathBuf {
        Self::config_dir().join("data").join("club_history.csv")
    }

    /// Load configuration from file, or return defaults if not found
    pub fn load() -> AppResult<Self> {
        Self::load_from(&Self::config_file())
    }

    pub fn load_from(path: &Path) -> AppResult<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let content = fs::read_to_string(path)?;
        if content.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_yaml::from_str(&content)
            .map_err(|e| AppError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Ledger path with `~/` expanded.
    pub fn ledger_path(&self) -> PathBuf {
        expand_tilde(&self.ledger)
    }

    /// Initialize the configuration directory and file.
    /// In test mode nothing is written, the resulting config is just returned.
    pub fn init_all(custom_ledger: Option<String>, is_test: bool) -> AppResult<Self> {
        let dir = Self::config_dir();

        let mut config = Self::load()?;

        if let Some(custom) = custom_ledger {
            config.ledger = custom;
        }

        if !is_test {
            fs::create_dir_all(&dir)?;
            let yaml = serde_yaml::to_string(&config)?;
            fs::write(Self::config_file(), yaml)?;
        }

        Ok(config)
    }
}
