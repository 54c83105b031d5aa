use std::path::PathBuf;

use directories::ProjectDirs;
use serde::Deserialize;

use crate::error::{Result, UserdumpError};

pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com/";

#[derive(Deserialize, Default)]
pub struct Config {
    pub base_url: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            return Ok(Config::default());
        }

        let contents =
            std::fs::read_to_string(&config_path).map_err(|e| UserdumpError::ConfigRead {
                path: config_path.clone(),
                source: e,
            })?;

        toml::from_str(&contents).map_err(|e| UserdumpError::ConfigParse {
            path: config_path,
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "userdump")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(UserdumpError::NoConfigDir)
    }

    /// Resolve the base URL: explicit flag, then env var, then config
    /// file, then the built-in default.
    pub fn resolve_base_url(&self, explicit: Option<&str>) -> String {
        if let Some(url) = explicit {
            return url.to_string();
        }

        if let Ok(url) = std::env::var("USERDUMP_BASE_URL") {
            return url;
        }

        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_url_wins() {
        let config = Config {
            base_url: Some("http://from-config/".to_string()),
        };
        assert_eq!(
            config.resolve_base_url(Some("http://explicit/")),
            "http://explicit/"
        );
    }

    #[test]
    fn test_config_file_url_used_when_no_flag() {
        let config = Config {
            base_url: Some("http://from-config/".to_string()),
        };
        if std::env::var("USERDUMP_BASE_URL").is_err() {
            assert_eq!(config.resolve_base_url(None), "http://from-config/");
        }
    }

    #[test]
    fn test_default_url_as_last_resort() {
        let config = Config::default();
        if std::env::var("USERDUMP_BASE_URL").is_err() {
            assert_eq!(config.resolve_base_url(None), DEFAULT_BASE_URL);
        }
    }
}
