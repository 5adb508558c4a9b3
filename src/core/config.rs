use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use url::Url;

pub const DEFAULT_SHARE_BASE_URL: &str = "http://localhost/ppi/";
pub const DEFAULT_GROUPING_SEPARATOR: char = ',';

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Page address share links are built on
    #[serde(default = "default_share_base_url")]
    pub share_base_url: String,
    /// Digit group separator for total pixel counts
    #[serde(default = "default_grouping_separator")]
    pub grouping_separator: char,
}

fn default_share_base_url() -> String {
    DEFAULT_SHARE_BASE_URL.to_string()
}

fn default_grouping_separator() -> char {
    DEFAULT_GROUPING_SEPARATOR
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_base_url: default_share_base_url(),
            grouping_separator: default_grouping_separator(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    pub fn load_from(config_path: &Path) -> Result<Self> {
        if !config_path.exists() {
            return Ok(Config::default());
        }

        let data = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

        // If the file is empty or corrupted, return default config
        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        Ok(serde_json::from_str(&data).unwrap_or_else(|e| {
            log::warn!("Ignoring unreadable config {:?}: {}", config_path, e);
            Config::default()
        }))
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_string_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("ppicalc").join("config.json"))
    }

    /// Set the base URL, rejecting anything `url` cannot parse
    pub fn set_share_base_url(&mut self, url: &str) -> Result<()> {
        let parsed = Url::parse(url).with_context(|| format!("Invalid base URL: {}", url))?;
        self.share_base_url = parsed.to_string();
        Ok(())
    }

    pub fn set_grouping_separator(&mut self, separator: char) -> Result<()> {
        if separator.is_ascii_digit() {
            anyhow::bail!("Separator cannot be a digit: {}", separator);
        }
        self.grouping_separator = separator;
        Ok(())
    }

    /// Parsed base URL, falling back to the default when the stored value is invalid
    pub fn share_base(&self) -> Result<Url> {
        Url::parse(&self.share_base_url)
            .or_else(|e| {
                log::warn!(
                    "Invalid share base URL {:?} ({}), using {}",
                    self.share_base_url,
                    e,
                    DEFAULT_SHARE_BASE_URL
                );
                Url::parse(DEFAULT_SHARE_BASE_URL)
            })
            .context("Failed to build share base URL")
    }
}
