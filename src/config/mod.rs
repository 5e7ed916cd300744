use crate::error::AppError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

pub mod paths;
pub mod user_prompts;
pub mod validation;

use paths::{get_config_path, get_log_dir_path};
use user_prompts::prompt_for_api_base_url;
use validation::validate_config;

/// Configuration structure for the application.
/// Handles loading, saving, and managing application settings.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Base URL of the federation content API. Should include https:// prefix.
    pub api_base_url: String,
    /// Path to the log file. If not specified, logs will be written to a default location.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_file_path: Option<String>,
    /// HTTP timeout in seconds for API requests. Defaults to 10 seconds if not specified.
    #[serde(default = "default_http_timeout")]
    pub http_timeout_seconds: u64,
}

/// Default HTTP timeout in seconds
fn default_http_timeout() -> u64 {
    crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
}

impl Default for Config {
    fn default() -> Self {
        Config {
            api_base_url: String::new(),
            log_file_path: None,
            http_timeout_seconds: default_http_timeout(),
        }
    }
}

impl Config {
    /// Loads configuration from the default config file location.
    /// If no config file exists, prompts user for the API base URL and creates one.
    /// Environment variables can override config file values.
    ///
    /// # Environment Variables
    /// - `NARDI_API_URL` - Override content API base URL
    /// - `NARDI_LOG_FILE` - Override log file path
    /// - `NARDI_HTTP_TIMEOUT` - Override HTTP timeout in seconds (default: 10)
    ///
    /// # Returns
    /// * `Ok(Config)` - Successfully loaded or created configuration
    /// * `Err(AppError)` - Error occurred during load/create
    pub async fn load() -> Result<Self, AppError> {
        let config_path = get_config_path();

        let mut config = if Path::new(&config_path).exists() {
            let content = fs::read_to_string(&config_path).await?;
            toml::from_str(&content)?
        } else if let Ok(api_base_url) = std::env::var(crate::constants::env_vars::API_URL) {
            Config {
                api_base_url,
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            }
        } else {
            let api_base_url = prompt_for_api_base_url().await?;

            let config = Config {
                api_base_url,
                log_file_path: None,
                http_timeout_seconds: default_http_timeout(),
            };

            config.save().await?;
            config
        };

        // Override with environment variables if present
        if let Ok(api_base_url) = std::env::var(crate::constants::env_vars::API_URL) {
            config.api_base_url = api_base_url;
        }

        if let Ok(log_file_path) = std::env::var(crate::constants::env_vars::LOG_FILE) {
            config.log_file_path = Some(log_file_path);
        }

        if let Some(timeout) = std::env::var(crate::constants::env_vars::HTTP_TIMEOUT)
            .ok()
            .and_then(|s| s.parse::<u64>().ok())
        {
            config.http_timeout_seconds = timeout;
        }

        config.validate()?;

        Ok(config)
    }

    /// Validates the configuration settings
    pub fn validate(&self) -> Result<(), AppError> {
        validate_config(&self.api_base_url, &self.log_file_path)
    }

    /// Saves current configuration to the default config file location.
    pub async fn save(&self) -> Result<(), AppError> {
        let config_path = get_config_path();
        self.save_to_path(&config_path).await
    }

    /// Returns the platform-specific path for the config file.
    pub fn get_config_path() -> String {
        paths::get_config_path()
    }

    /// Returns the platform-specific path for the log directory.
    pub fn get_log_dir_path() -> String {
        paths::get_log_dir_path()
    }

    /// Displays current configuration settings to stdout.
    pub async fn display() -> Result<(), AppError> {
        let config_path = get_config_path();
        let log_dir = get_log_dir_path();

        if Path::new(&config_path).exists() {
            let config = Config::load().await?;
            println!("\nCurrent Configuration");
            println!("────────────────────────────────────");
            println!("Config Location:");
            println!("{config_path}");
            println!("────────────────────────────────────");
            println!("Content API Base URL:");
            println!("{}", config.api_base_url);
            println!("────────────────────────────────────");
            println!("HTTP Timeout:");
            println!("{} seconds", config.http_timeout_seconds);
            println!("────────────────────────────────────");
            println!("Log File Location:");
            if let Some(custom_path) = &config.log_file_path {
                println!("{custom_path}");
            } else {
                println!("{log_dir}/nardi-portal.log");
                println!("(Default location)");
            }
        } else {
            println!("\nNo configuration file found at:");
            println!("{config_path}");
        }

        Ok(())
    }

    /// Saves configuration to a custom file path.
    ///
    /// Creates the parent directory if it doesn't exist and ensures the
    /// base URL carries an https:// prefix.
    pub async fn save_to_path(&self, path: &str) -> Result<(), AppError> {
        let config_dir = Path::new(path).parent().ok_or_else(|| {
            AppError::config_error(format!("Path '{path}' has no parent directory"))
        })?;

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).await?;
        }
        let api_base_url = normalize_base_url(&self.api_base_url);
        let content = toml::to_string_pretty(&Config {
            api_base_url,
            log_file_path: self.log_file_path.clone(),
            http_timeout_seconds: self.http_timeout_seconds,
        })?;
        let mut file = fs::File::create(path).await?;
        file.write_all(content.as_bytes()).await?;
        file.flush().await?;
        Ok(())
    }

    /// Loads configuration from a custom file path (for testing).
    pub async fn load_from_path(path: &str) -> Result<Self, AppError> {
        let content = fs::read_to_string(path).await?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}

/// Ensures a base URL has a scheme and no trailing slash, so URL builders can
/// join paths onto it directly. Local development hosts keep plain http://.
pub fn normalize_base_url(url: &str) -> String {
    let trimmed = url.trim_end_matches('/');
    if trimmed.starts_with("https://") || trimmed.starts_with("http://localhost") || trimmed.starts_with("http://127.0.0.1") {
        trimmed.to_string()
    } else {
        format!("https://{}", trimmed.trim_start_matches("http://"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_base_url() {
        assert_eq!(
            normalize_base_url("https://api.nardi.ge/"),
            "https://api.nardi.ge"
        );
        assert_eq!(
            normalize_base_url("api.nardi.ge"),
            "https://api.nardi.ge"
        );
        assert_eq!(
            normalize_base_url("http://api.nardi.ge"),
            "https://api.nardi.ge"
        );
        assert_eq!(
            normalize_base_url("http://localhost:1337/"),
            "http://localhost:1337"
        );
    }

    #[tokio::test]
    async fn test_save_and_load_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();

        let config = Config {
            api_base_url: "https://api.nardi.ge".to_string(),
            log_file_path: Some("/tmp/nardi.log".to_string()),
            http_timeout_seconds: 10,
        };
        config.save_to_path(&path_str).await.unwrap();

        let loaded = Config::load_from_path(&path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://api.nardi.ge");
        assert_eq!(loaded.log_file_path.as_deref(), Some("/tmp/nardi.log"));
        assert_eq!(loaded.http_timeout_seconds, 10);
    }

    #[tokio::test]
    async fn test_save_adds_https_prefix() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        let path_str = path.to_string_lossy().to_string();

        let config = Config {
            api_base_url: "api.nardi.ge".to_string(),
            log_file_path: None,
            http_timeout_seconds: 10,
        };
        config.save_to_path(&path_str).await.unwrap();

        let loaded = Config::load_from_path(&path_str).await.unwrap();
        assert_eq!(loaded.api_base_url, "https://api.nardi.ge");
    }

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert!(config.api_base_url.is_empty());
        assert!(config.log_file_path.is_none());
        assert_eq!(
            config.http_timeout_seconds,
            crate::constants::DEFAULT_HTTP_TIMEOUT_SECONDS
        );
    }
}
