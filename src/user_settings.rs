use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

const SETTINGS_FILE: &str = "ethtx_settings.json";

fn default_toast_duration_ms() -> u64 {
    crate::config::DEFAULT_TOAST_DURATION_MS
}

/// User settings that persist between sessions.
///
/// Only UI preferences live here; wallets, balances and transactions are never written to disk.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserSettings {
    /// Backend origin override (None = environment or built-in default)
    #[serde(default)]
    pub backend_url: Option<String>,
    /// Directory for printable receipts (None = config default)
    #[serde(default)]
    pub receipt_directory: Option<String>,
    /// Toast auto-dismiss delay in milliseconds
    #[serde(default = "default_toast_duration_ms")]
    pub toast_duration_ms: u64,
}

impl Default for UserSettings {
    fn default() -> Self {
        Self {
            backend_url: None,
            receipt_directory: None,
            toast_duration_ms: default_toast_duration_ms(),
        }
    }
}

impl UserSettings {
    /// Get the settings file path
    fn settings_path() -> PathBuf {
        // Try to use the app data directory, fall back to current directory
        if let Some(config_dir) = dirs::config_dir() {
            let app_dir = config_dir.join("ethtx");
            if !app_dir.exists() {
                let _ = fs::create_dir_all(&app_dir);
            }
            app_dir.join(SETTINGS_FILE)
        } else {
            PathBuf::from(SETTINGS_FILE)
        }
    }

    /// Get the settings file path for display
    pub fn settings_path_display() -> String {
        Self::settings_path().display().to_string()
    }

    /// Load settings from disk, or return defaults if not found
    pub fn load() -> Self {
        Self::load_from(&Self::settings_path())
    }

    pub(crate) fn load_from(path: &std::path::Path) -> Self {
        if path.exists() {
            match fs::read_to_string(path) {
                Ok(content) => match serde_json::from_str(&content) {
                    Ok(settings) => {
                        tracing::info!("Loaded settings from {:?}", path);
                        return settings;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to parse settings file: {}", e);
                    }
                },
                Err(e) => {
                    tracing::warn!("Failed to read settings file: {}", e);
                }
            }
        }
        tracing::info!("Using default settings");
        Self::default()
    }

    /// Save settings to disk
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::settings_path())
    }

    pub(crate) fn save_to(&self, path: &std::path::Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        tracing::info!("Saved settings to {:?}", path);
        Ok(())
    }

    /// Backend override, or None if using the default
    pub fn backend_url_override(&self) -> Option<&str> {
        self.backend_url.as_deref().filter(|s| !s.is_empty())
    }

    /// Set the backend override (empty string removes it)
    pub fn set_backend_url(&mut self, url: String) {
        if url.trim().is_empty() {
            self.backend_url = None;
        } else {
            self.backend_url = Some(url.trim().to_string());
        }
    }
}
