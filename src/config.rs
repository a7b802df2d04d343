//! Startup configuration.
//!
//! Values are layered, later sources overriding earlier ones:
//! 1. `config.json` in the user config directory (`gifwall/config.json`)
//! 2. a `.env` file in the working directory
//! 3. the process environment
//!
//! The API key and base URL are required. Anything missing is a fatal
//! startup error; there is no degraded mode.

use std::path::{Path, PathBuf};
use std::time::Duration;

use log::{debug, info};
use serde::Deserialize;

use crate::error::ConfigError;
use crate::query::DEFAULT_PAGE_SIZE;

pub const API_KEY_VAR: &str = "GIPHY_API_KEY";
pub const BASE_URL_VAR: &str = "GIPHY_BASE_URL";
pub const PAGE_SIZE_VAR: &str = "GIPHY_PAGE_SIZE";
pub const CACHE_TTL_VAR: &str = "GIPHY_CACHE_TTL_SECS";

/// Default lifetime of a cached page.
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(60);

/// Optional on-disk configuration. Every field may be omitted.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ConfigFile {
    pub api_key: Option<String>,
    pub base_url: Option<String>,
    pub page_size: Option<u32>,
    pub cache_ttl_secs: Option<u64>,
}

impl ConfigFile {
    /// Default location: `<config dir>/gifwall/config.json`.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("gifwall").join("config.json"))
    }

    /// Loads the file at `path`. A missing file yields an empty config.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            debug!("No config file at {}", path.display());
            return Ok(Self::default());
        }

        let text = std::fs::read_to_string(path)?;
        serde_json::from_str(&text).map_err(|source| ConfigError::File {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Resolved configuration for the GIPHY client.
#[derive(Debug, Clone, PartialEq)]
pub struct GiphyConfig {
    pub api_key: String,
    pub base_url: String,
    pub page_size: u32,
    pub cache_ttl: Duration,
}

impl Default for GiphyConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: String::new(),
            page_size: DEFAULT_PAGE_SIZE,
            cache_ttl: DEFAULT_CACHE_TTL,
        }
    }
}

impl GiphyConfig {
    /// Loads configuration from the config file, `.env`, and the environment.
    pub fn load() -> Result<Self, ConfigError> {
        match dotenvy::dotenv() {
            Ok(path) => info!("Loaded environment from {}", path.display()),
            Err(e) => debug!("No .env file loaded: {}", e),
        }

        let file = match ConfigFile::default_path() {
            Some(path) => ConfigFile::load(&path)?,
            None => ConfigFile::default(),
        };

        Self::resolve(|name| std::env::var(name).ok(), file)
    }

    /// Merges an environment lookup over a config file.
    ///
    /// Blank values count as absent.
    pub fn resolve<F>(lookup: F, file: ConfigFile) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_blank = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        let api_key = non_blank(lookup(API_KEY_VAR))
            .or_else(|| non_blank(file.api_key.clone()))
            .ok_or(ConfigError::Missing(API_KEY_VAR))?;

        let base_url = non_blank(lookup(BASE_URL_VAR))
            .or_else(|| non_blank(file.base_url.clone()))
            .ok_or(ConfigError::Missing(BASE_URL_VAR))?;

        let page_size = match non_blank(lookup(PAGE_SIZE_VAR)) {
            Some(raw) => parse_positive(PAGE_SIZE_VAR, &raw)? as u32,
            None => file.page_size.filter(|n| *n > 0).unwrap_or(DEFAULT_PAGE_SIZE),
        };

        let cache_ttl = match non_blank(lookup(CACHE_TTL_VAR)) {
            Some(raw) => Duration::from_secs(parse_positive(CACHE_TTL_VAR, &raw)?),
            None => file
                .cache_ttl_secs
                .map(Duration::from_secs)
                .unwrap_or(DEFAULT_CACHE_TTL),
        };

        Ok(Self {
            api_key: api_key.trim().to_string(),
            base_url: base_url.trim().to_string(),
            page_size,
            cache_ttl,
        })
    }
}

fn parse_positive(name: &'static str, raw: &str) -> Result<u64, ConfigError> {
    match raw.trim().parse::<u64>() {
        Ok(n) if n > 0 && n <= u32::MAX as u64 => Ok(n),
        _ => Err(ConfigError::Invalid {
            name,
            value: raw.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |name| map.get(name).cloned()
    }

    #[test]
    fn test_resolve_from_environment() {
        let config = GiphyConfig::resolve(
            env(&[(API_KEY_VAR, "key"), (BASE_URL_VAR, "https://api.giphy.com/v1")]),
            ConfigFile::default(),
        )
        .unwrap();
        assert_eq!(config.api_key, "key");
        assert_eq!(config.base_url, "https://api.giphy.com/v1");
        assert_eq!(config.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.cache_ttl, DEFAULT_CACHE_TTL);
    }

    #[test]
    fn test_missing_api_key_is_fatal() {
        let err = GiphyConfig::resolve(
            env(&[(BASE_URL_VAR, "https://api.giphy.com/v1")]),
            ConfigFile::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(API_KEY_VAR)));
    }

    #[test]
    fn test_blank_base_url_is_missing() {
        let err = GiphyConfig::resolve(
            env(&[(API_KEY_VAR, "key"), (BASE_URL_VAR, "  ")]),
            ConfigFile::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Missing(BASE_URL_VAR)));
    }

    #[test]
    fn test_environment_overrides_file() {
        let file = ConfigFile {
            api_key: Some("file-key".to_string()),
            base_url: Some("https://file.example/v1".to_string()),
            page_size: Some(10),
            cache_ttl_secs: Some(5),
        };
        let config = GiphyConfig::resolve(env(&[(API_KEY_VAR, "env-key")]), file).unwrap();
        assert_eq!(config.api_key, "env-key");
        assert_eq!(config.base_url, "https://file.example/v1");
        assert_eq!(config.page_size, 10);
        assert_eq!(config.cache_ttl, Duration::from_secs(5));
    }

    #[test]
    fn test_invalid_page_size() {
        let err = GiphyConfig::resolve(
            env(&[(API_KEY_VAR, "k"), (BASE_URL_VAR, "u"), (PAGE_SIZE_VAR, "zero")]),
            ConfigFile::default(),
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { name: PAGE_SIZE_VAR, .. }));
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let path = std::env::temp_dir().join("gifwall-no-such-config.json");
        let _ = std::fs::remove_file(&path);
        let file = ConfigFile::load(&path).unwrap();
        assert!(file.api_key.is_none());
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let path = std::env::temp_dir().join("gifwall-bad-config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ConfigFile::load(&path).unwrap_err();
        assert!(matches!(err, ConfigError::File { .. }));
        let _ = std::fs::remove_file(&path);
    }
}
