use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Main configuration structure
///
/// Loaded from `config.toml` in the platform config dir. Missing file or
/// missing keys fall back to defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub explore: ExploreConfig,
    #[serde(default)]
    pub favorites: FavoritesConfig,
}

impl Config {
    /// Load config from default location, defaults if there is none
    pub fn load() -> crate::Result<Self> {
        let config_path = Self::config_path()?;

        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Load config from an explicit path
    pub fn load_from(path: &Path) -> crate::Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to parse config: {}", e)))?;
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> crate::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> crate::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| crate::Error::ConfigError(format!("Failed to serialize config: {}", e)))?;

        std::fs::write(path, contents)?;
        Ok(())
    }

    /// XDG on Linux, Application Support on macOS, AppData on Windows
    pub fn config_path() -> crate::Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find config directory".into()))?
            .join("recipe-explorer");

        Ok(config_dir.join("config.toml"))
    }
}

/// Which RecipeSource backs the app
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Built-in sample catalog
    #[default]
    Local,
    /// HTTP recipe API at `api_url`
    Remote,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default)]
    pub backend: Backend,

    #[serde(default = "default_api_url")]
    pub api_url: String,

    /// Fake network delay for the local catalog, in ms
    #[serde(default = "default_search_latency")]
    pub search_latency_ms: u64,

    #[serde(default = "default_detail_latency")]
    pub detail_latency_ms: u64,

    /// Per-request timeout for the remote backend
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

fn default_api_url() -> String {
    "http://localhost:3001/api".to_string()
}

fn default_search_latency() -> u64 {
    300
}

fn default_detail_latency() -> u64 {
    220
}

fn default_timeout() -> u64 {
    10
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            backend: Backend::default(),
            api_url: default_api_url(),
            search_latency_ms: default_search_latency(),
            detail_latency_ms: default_detail_latency(),
            timeout_secs: default_timeout(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExploreConfig {
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Quiet period before a burst of input turns into one fetch
    #[serde(default = "default_debounce")]
    pub debounce_ms: u64,
}

fn default_page_size() -> usize {
    12
}

fn default_debounce() -> u64 {
    150
}

impl Default for ExploreConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            debounce_ms: default_debounce(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FavoritesConfig {
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Ids to start from when nothing usable is persisted
    #[serde(default)]
    pub seed: Vec<String>,

    /// SQLite file; defaults to the platform data dir
    #[serde(default)]
    pub database: Option<PathBuf>,
}

fn default_storage_key() -> String {
    crate::favorites::FAVORITES_STORAGE_KEY.to_string()
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self {
            storage_key: default_storage_key(),
            seed: Vec::new(),
            database: None,
        }
    }
}

impl FavoritesConfig {
    /// Explicit database path, or `<data_dir>/recipe-explorer/storage.db`
    pub fn database_path(&self) -> crate::Result<PathBuf> {
        if let Some(path) = &self.database {
            return Ok(path.clone());
        }

        let data_dir = dirs::data_dir()
            .ok_or_else(|| crate::Error::ConfigError("Could not find data directory".into()))?
            .join("recipe-explorer");

        Ok(data_dir.join("storage.db"))
    }
}
