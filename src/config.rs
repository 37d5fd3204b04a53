use anyhow::{Context, Result};
use dirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Overrides the database location, ignoring the config file.
pub const DB_ENV: &str = "SNIPPETS_DB";

const APP_DIR: &str = "snippets";
const LOG_FILE: &str = "snippets.log";

fn default_database() -> String {
    "snippets.db".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub data_dir: PathBuf,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(skip)]
    pub db_override: Option<PathBuf>,
}

impl Config {
    pub fn init() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        let mut config = Self::load_or_create(&config_path, Self::get_data_dir()?)?;

        if let Some(path) = std::env::var_os(DB_ENV).filter(|p| !p.is_empty()) {
            config.db_override = Some(PathBuf::from(path));
        }

        Ok(config)
    }

    /// Reads `config_path`, writing a default config pointing at `data_dir` on first run.
    pub fn load_or_create(config_path: &Path, data_dir: PathBuf) -> Result<Self> {
        let config = if config_path.exists() {
            let config_str = fs::read_to_string(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
            serde_json::from_str::<Config>(&config_str)
                .with_context(|| format!("Failed to parse config file: {:?}", config_path))?
        } else {
            let config = Config {
                data_dir,
                database: default_database(),
                db_override: None,
            };

            if let Some(parent) = config_path.parent() {
                fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
            }
            let config_str = serde_json::to_string_pretty(&config)
                .context("Failed to serialize config")?;
            fs::write(config_path, config_str)
                .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

            config
        };

        fs::create_dir_all(&config.data_dir)
            .with_context(|| format!("Failed to create data directory: {:?}", config.data_dir))?;

        Ok(config)
    }

    fn get_data_dir() -> Result<PathBuf> {
        let base_dir = dirs::data_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".local").join("share")))
            .context("Failed to determine data directory")?;

        Ok(base_dir.join(APP_DIR))
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .or_else(|| dirs::home_dir().map(|h| h.join(".config")))
            .context("Failed to determine config directory")?;

        Ok(config_dir.join(APP_DIR).join("config.json"))
    }

    pub fn db_path(&self) -> PathBuf {
        match &self.db_override {
            Some(path) => path.clone(),
            None => self.data_dir.join(&self.database),
        }
    }

    pub fn log_path(&self) -> PathBuf {
        self.data_dir.join(LOG_FILE)
    }
}
