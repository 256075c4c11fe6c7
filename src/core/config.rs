use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};
use tracing::debug;

const DATA_FILE: &str = "homerce.json";

fn default_currency() -> String {
    "$".to_string()
}

fn default_sample_data() -> bool {
    true
}

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Directory holding the data file. Defaults to the platform data dir.
    pub data_path: Option<String>,
    /// Symbol printed in front of every amount.
    #[serde(default = "default_currency")]
    pub currency: String,
    /// Seed a fresh installation with sample clients, services and revenue.
    #[serde(default = "default_sample_data")]
    pub sample_data: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: None,
            currency: default_currency(),
            sample_data: default_sample_data(),
        }
    }
}

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", "homerce", "homerce").context("Could not determine project directories")
}

impl AppConfig {
    /// Loads the config at the default location, falling back to the built-in
    /// defaults when none has been set up yet.
    pub fn load() -> Result<Self> {
        debug!("Loading default config");
        let config_path = Self::default_config_path()?;
        if !config_path.exists() {
            debug!(path = %config_path.display(), "No config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from_path(&config_path)
    }

    pub fn default_config_path() -> Result<PathBuf> {
        Ok(project_dirs()?.config_dir().join("config.yaml"))
    }

    pub fn data_dir(&self) -> Result<PathBuf> {
        if let Some(custom_path) = &self.data_path {
            return Ok(PathBuf::from(custom_path));
        }
        Ok(project_dirs()?.data_dir().to_path_buf())
    }

    /// Full path of the JSON file the trackers are saved to.
    pub fn data_file(&self) -> Result<PathBuf> {
        Ok(self.data_dir()?.join(DATA_FILE))
    }

    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let config_str = fs::read_to_string(path.as_ref())
            .with_context(|| format!("Failed to read config file: {}", path.as_ref().display()))?;

        let config: Self = serde_yaml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config file: {}", path.as_ref().display()))?;
        debug!("Successfully loaded config");
        Ok(config)
    }
}
