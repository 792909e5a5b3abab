use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;
use std::time::Duration;
use url::Url;

/// Backend origin used when nothing else is configured.
pub const DEFAULT_BACKEND_URL: &str = "http://127.0.0.1:8080";

/// How long a toast stays on screen before dismissing itself.
pub const DEFAULT_TOAST_DURATION_MS: u64 = 1000;

/// Environment variable overriding the backend origin
pub const BACKEND_URL_ENV: &str = "ETHTX_BACKEND_URL";

/// Environment variable overriding the directory receipts are written to
pub const RECEIPT_DIR_ENV: &str = "ETHTX_RECEIPT_DIR";

#[derive(Clone, Debug)]
pub struct Config {
    pub backend_url: String,
    pub receipt_directory: String, // Directory printable receipts are written to
    pub toast_duration: Duration,
}

impl Config {
    pub fn new(backend_url: String) -> Self {
        // Default receipt directory to user's documents or current directory
        let receipt_directory = env::var(RECEIPT_DIR_ENV)
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .or_else(|| {
                env::var("USERPROFILE").or_else(|_| env::var("HOME")).ok().map(|home| {
                    let mut path = PathBuf::from(home);
                    path.push("Documents");
                    path.push("ETH-TX");
                    path.to_string_lossy().to_string()
                })
            })
            .unwrap_or_else(|| ".".to_string());

        Self {
            backend_url,
            receipt_directory,
            toast_duration: Duration::from_millis(DEFAULT_TOAST_DURATION_MS),
        }
    }

    /// Build the config from the environment, then apply saved user settings on top
    pub fn from_settings(settings: &crate::user_settings::UserSettings) -> Self {
        let mut config = Self::default();
        if let Some(url) = settings.backend_url_override() {
            config.backend_url = url.to_string();
        }
        if let Some(dir) = settings.receipt_directory.as_deref().filter(|d| !d.trim().is_empty()) {
            config.receipt_directory = dir.trim().to_string();
        }
        config.toast_duration = Duration::from_millis(settings.toast_duration_ms);
        config
    }
}

impl Default for Config {
    fn default() -> Self {
        let backend_url = env::var(BACKEND_URL_ENV)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_BACKEND_URL.to_string());
        Self::new(backend_url)
    }
}

/// Check that a backend origin is an absolute http(s) URL
pub fn validate_backend_url(input: &str) -> Result<Url> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(anyhow!("Backend URL cannot be empty"));
    }
    let url = Url::parse(trimmed).map_err(|e| anyhow!("Invalid backend URL '{}': {}", trimmed, e))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(anyhow!("Unsupported backend URL scheme '{}'", other)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_settings::UserSettings;

    // ==================== validate_backend_url tests ====================

    #[test]
    fn test_validate_backend_url_default() {
        let url = validate_backend_url(DEFAULT_BACKEND_URL).unwrap();
        assert_eq!(url.host_str(), Some("127.0.0.1"));
        assert_eq!(url.port(), Some(8080));
    }

    #[test]
    fn test_validate_backend_url_trims_whitespace() {
        let url = validate_backend_url("  https://wallet.example.com  ").unwrap();
        assert_eq!(url.scheme(), "https");
        assert_eq!(url.host_str(), Some("wallet.example.com"));
    }

    #[test]
    fn test_validate_backend_url_empty_fails() {
        let result = validate_backend_url("   ");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("empty"));
    }

    #[test]
    fn test_validate_backend_url_relative_fails() {
        assert!(validate_backend_url("127.0.0.1:8080/api").is_err());
        assert!(validate_backend_url("not a url").is_err());
    }

    #[test]
    fn test_validate_backend_url_wrong_scheme_fails() {
        let result = validate_backend_url("ftp://127.0.0.1:8080");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("scheme"));
    }

    // ==================== Config tests ====================

    #[test]
    fn test_config_new_keeps_backend_url() {
        let config = Config::new("http://localhost:9000".to_string());
        assert_eq!(config.backend_url, "http://localhost:9000");
        assert_eq!(config.toast_duration, Duration::from_millis(DEFAULT_TOAST_DURATION_MS));
        assert!(!config.receipt_directory.is_empty());
    }

    #[test]
    fn test_config_from_settings_applies_overrides() {
        let mut settings = UserSettings::default();
        settings.set_backend_url("http://10.0.0.5:8080".to_string());
        settings.receipt_directory = Some("/tmp/receipts".to_string());
        settings.toast_duration_ms = 2500;

        let config = Config::from_settings(&settings);

        assert_eq!(config.backend_url, "http://10.0.0.5:8080");
        assert_eq!(config.receipt_directory, "/tmp/receipts");
        assert_eq!(config.toast_duration, Duration::from_millis(2500));
    }

    #[test]
    fn test_config_from_settings_blank_receipt_dir_ignored() {
        let mut settings = UserSettings::default();
        settings.receipt_directory = Some("   ".to_string());

        let config = Config::from_settings(&settings);

        assert_ne!(config.receipt_directory.trim(), "");
    }
}
