use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
    time::Duration,
};

use crate::{client::ClientConfig, model::Selection};

/// Environment variable that takes precedence over the stored API key.
pub const API_KEY_ENV: &str = "WEATHER_API_KEY";

/// Configuration stored on disk.
///
/// Example TOML:
/// ```toml
/// api_key = "..."
/// site_id = "3066"
/// region_id = "500"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Site used by `weather site forecast`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub site_id: Option<String>,

    /// Region of the selected site, used for the regional text forecast.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub region_id: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,

    /// Key taken from the environment; never written back to disk.
    #[serde(skip)]
    env_api_key: Option<String>,
}

impl Config {
    /// API key, preferring the environment over the stored value.
    pub fn api_key(&self) -> Result<&str> {
        non_blank(self.env_api_key.as_deref())
            .or_else(|| non_blank(self.api_key.as_deref()))
            .ok_or_else(|| {
                anyhow!(
                    "API key not set.\n\
                     Hint: run `weather configure` or set {API_KEY_ENV}."
                )
            })
    }

    pub fn site_id(&self) -> Result<&str> {
        non_blank(self.site_id.as_deref()).ok_or_else(|| {
            anyhow!(
                "Site id is not set.\n\
                 Hint: run `weather site set <NAME>` first, or `weather site find <TEXT>` to search for a site."
            )
        })
    }

    pub fn region_id(&self) -> Result<&str> {
        non_blank(self.region_id.as_deref()).ok_or_else(|| {
            anyhow!(
                "Region id is not set.\n\
                 Hint: run `weather site set <NAME>` first, or pass `--id` explicitly."
            )
        })
    }

    pub fn set_api_key(&mut self, api_key: String) {
        self.api_key = Some(api_key.trim().to_string());
    }

    /// Store the selected site and its region. A site whose region is unknown
    /// clears any previously stored region id.
    pub fn set_selection(&mut self, selection: &Selection) {
        self.site_id = Some(selection.site.id.clone());
        self.region_id = selection.region.as_ref().map(|r| r.id.clone());
    }

    /// Settings for the HTTP client; fails if no API key is available.
    pub fn client_config(&self) -> Result<ClientConfig> {
        let mut cfg = ClientConfig::new(self.api_key()?);

        if let Some(url) = non_blank(self.base_url.as_deref()) {
            cfg = cfg.with_base_url(url);
        }
        match self.timeout_secs {
            Some(0) => anyhow::bail!("timeout_secs must be greater than zero"),
            Some(secs) => cfg = cfg.with_timeout(Duration::from_secs(secs)),
            None => {}
        }

        Ok(cfg)
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    /// The `WEATHER_API_KEY` environment variable overrides the stored key.
    pub fn load() -> Result<Self> {
        let mut cfg = Self::load_from(&Self::config_file_path()?)?;
        cfg.env_api_key = std::env::var(API_KEY_ENV).ok();
        Ok(cfg)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("uk", "metoffice-datapoint", "weather")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}
