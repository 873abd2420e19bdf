//! Configuration management
//!
//! settings.json format, shared with any other front-end pointed at the
//! same directory:
//! ```json
//! {
//!   "app": { "apiBaseUrl": "https://...", "timeoutSecs": 30, ... },
//!   "session": { "token": "...", "userId": "..." }
//! }
//! ```

use std::collections::HashMap;
use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};

/// Default API base URL when nothing is configured
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:4000";
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
    #[serde(default)]
    session: SessionSettings,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AppSettings {
    #[serde(default)]
    api_base_url: Option<String>,
    #[serde(default)]
    timeout_secs: Option<u64>,
    #[serde(flatten)]
    other: HashMap<String, serde_json::Value>,
}

/// Persisted auth session (the original kept this in browser storage)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SessionSettings {
    #[serde(default)]
    token: Option<String>,
    #[serde(default)]
    user_id: Option<String>,
}

/// Payflow configuration (simplified view of settings)
#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub timeout_secs: u64,
    pub token: Option<String>,
    pub user_id: Option<String>,
    // Keep the raw settings for preservation when saving
    _raw_settings: SettingsFile,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            token: None,
            user_id: None,
            _raw_settings: SettingsFile::default(),
        }
    }
}

impl Config {
    /// Load config from the payflow directory
    ///
    /// The API base URL can come from, in priority order:
    /// 1. Environment variable PAYFLOW_API_URL (for CI/testing)
    /// 2. Settings file
    /// 3. The built-in default
    pub fn load(payflow_dir: &Path) -> Result<Self> {
        let settings_path = payflow_dir.join("settings.json");

        let raw: SettingsFile = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        let api_base_url = std::env::var("PAYFLOW_API_URL")
            .ok()
            .filter(|v| !v.is_empty())
            .or_else(|| raw.app.api_base_url.clone())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Ok(Self {
            api_base_url,
            timeout_secs: raw.app.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS),
            token: raw.session.token.clone(),
            user_id: raw.session.user_id.clone(),
            _raw_settings: raw,
        })
    }

    /// Save config to the payflow directory
    /// Preserves app settings this client doesn't manage
    pub fn save(&self, payflow_dir: &Path) -> Result<()> {
        let settings_path = payflow_dir.join("settings.json");

        // Load existing settings to preserve fields we don't manage
        let mut settings = if settings_path.exists() {
            let content = std::fs::read_to_string(&settings_path)?;
            serde_json::from_str::<SettingsFile>(&content).unwrap_or_default()
        } else {
            SettingsFile::default()
        };

        settings.app.api_base_url = Some(self.api_base_url.clone());
        settings.app.timeout_secs = Some(self.timeout_secs);
        settings.session.token = self.token.clone();
        settings.session.user_id = self.user_id.clone();

        let content = serde_json::to_string_pretty(&settings)?;
        std::fs::write(&settings_path, content)?;
        Ok(())
    }

    /// Record a logged-in session
    pub fn set_session(&mut self, token: Option<String>, user_id: Option<String>) {
        self.token = token;
        self.user_id = user_id;
    }

    /// Forget the current session
    pub fn clear_session(&mut self) {
        self.token = None;
        self.user_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_defaults_when_no_settings_file() {
        let dir = tempdir().unwrap();
        let config = Config::load(dir.path()).unwrap();

        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert!(config.token.is_none());
    }

    #[test]
    fn test_save_and_reload_session() {
        let dir = tempdir().unwrap();

        let mut config = Config::load(dir.path()).unwrap();
        config.api_base_url = "https://api.payflow.test".to_string();
        config.set_session(Some("jwt-1".to_string()), Some("u-1".to_string()));
        config.save(dir.path()).unwrap();

        let reloaded = Config::load(dir.path()).unwrap();
        assert_eq!(reloaded.api_base_url, "https://api.payflow.test");
        assert_eq!(reloaded.token.as_deref(), Some("jwt-1"));
        assert_eq!(reloaded.user_id.as_deref(), Some("u-1"));
    }

    #[test]
    fn test_save_preserves_unmanaged_fields() {
        let dir = tempdir().unwrap();
        let settings_path = dir.path().join("settings.json");
        std::fs::write(
            &settings_path,
            r#"{"app": {"theme": "dark"}, "session": {}}"#,
        )
        .unwrap();

        let config = Config::load(dir.path()).unwrap();
        config.save(dir.path()).unwrap();

        let content = std::fs::read_to_string(&settings_path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&content).unwrap();
        assert_eq!(value["app"]["theme"], "dark");
    }

    #[test]
    fn test_corrupt_settings_fall_back_to_defaults() {
        let dir = tempdir().unwrap();
        std::fs::write(dir.path().join("settings.json"), "{not json").unwrap();

        let config = Config::load(dir.path()).unwrap();
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
