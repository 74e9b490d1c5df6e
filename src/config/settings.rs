//! User settings for Linqkeun
//!
//! Holds the backend base URL, the UI tick rate and the default log filter.
//! Values come from the optional `config.json` and can be overridden from the
//! command line (or its environment variable) at startup.

use reqwest::Url;
use serde::{Deserialize, Serialize};

use super::paths::LinqkeunPaths;
use crate::error::ErpError;

/// Backend used when nothing else is configured
pub const DEFAULT_BACKEND_URL: &str = "http://localhost:8000";

/// Settings for Linqkeun
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Settings {
    /// Base URL of the REST backend
    #[serde(default = "default_backend_url")]
    pub backend_url: String,

    /// Interval between UI ticks in milliseconds
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// Default tracing filter (overridden by `RUST_LOG`)
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_backend_url() -> String {
    DEFAULT_BACKEND_URL.to_string()
}

fn default_tick_rate_ms() -> u64 {
    250
}

fn default_log_filter() -> String {
    "info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            backend_url: default_backend_url(),
            tick_rate_ms: default_tick_rate_ms(),
            log_filter: default_log_filter(),
        }
    }
}

impl Settings {
    /// Load settings from disk, or fall back to defaults if the file doesn't exist
    pub fn load_or_default(paths: &LinqkeunPaths) -> Result<Self, ErpError> {
        let settings_path = paths.settings_file();

        if !settings_path.exists() {
            return Ok(Settings::default());
        }

        let contents = std::fs::read_to_string(&settings_path)
            .map_err(|e| ErpError::Io(format!("Failed to read settings file: {}", e)))?;

        serde_json::from_str(&contents)
            .map_err(|e| ErpError::Config(format!("Failed to parse settings file: {}", e)))
    }

    /// Save settings to disk
    pub fn save(&self, paths: &LinqkeunPaths) -> Result<(), ErpError> {
        paths.ensure_directories()?;

        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ErpError::Config(format!("Failed to serialize settings: {}", e)))?;

        std::fs::write(paths.settings_file(), contents)
            .map_err(|e| ErpError::Io(format!("Failed to write settings file: {}", e)))
    }

    /// Apply a backend URL override from the command line or environment
    pub fn with_backend_url(mut self, backend_url: Option<String>) -> Self {
        if let Some(url) = backend_url {
            self.backend_url = url;
        }
        self
    }

    /// Validate and normalize the backend URL
    ///
    /// The URL must be absolute with an `http` or `https` scheme. A trailing
    /// slash is removed so request paths can be appended directly.
    pub fn validated_backend_url(&self) -> Result<String, ErpError> {
        let raw = self.backend_url.trim();
        let url = Url::parse(raw)
            .map_err(|e| ErpError::Config(format!("Invalid backend URL '{}': {}", raw, e)))?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ErpError::Config(format!(
                "Backend URL must use http or https, got '{}'",
                url.scheme()
            )));
        }

        Ok(raw.trim_end_matches('/').to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.backend_url, "http://localhost:8000");
        assert_eq!(settings.tick_rate_ms, 250);
        assert_eq!(settings.log_filter, "info");
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinqkeunPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings::load_or_default(&paths).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn test_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinqkeunPaths::with_base_dir(temp_dir.path().to_path_buf());

        let settings = Settings {
            backend_url: "https://erp.example.co.id".into(),
            ..Settings::default()
        };
        settings.save(&paths).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.backend_url, "https://erp.example.co.id");
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinqkeunPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), r#"{"tick_rate_ms": 100}"#).unwrap();

        let loaded = Settings::load_or_default(&paths).unwrap();
        assert_eq!(loaded.tick_rate_ms, 100);
        assert_eq!(loaded.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_corrupt_file_is_config_error() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinqkeunPaths::with_base_dir(temp_dir.path().to_path_buf());
        std::fs::write(paths.settings_file(), "not json").unwrap();

        let err = Settings::load_or_default(&paths).unwrap_err();
        assert!(matches!(err, ErpError::Config(_)));
    }

    #[test]
    fn test_override_wins() {
        let settings =
            Settings::default().with_backend_url(Some("http://10.0.0.5:9000".into()));
        assert_eq!(settings.backend_url, "http://10.0.0.5:9000");

        let unchanged = Settings::default().with_backend_url(None);
        assert_eq!(unchanged.backend_url, DEFAULT_BACKEND_URL);
    }

    #[test]
    fn test_validated_backend_url() {
        let settings = Settings::default().with_backend_url(Some("http://api.local/".into()));
        assert_eq!(settings.validated_backend_url().unwrap(), "http://api.local");

        let bad_scheme = Settings::default().with_backend_url(Some("ftp://api.local".into()));
        assert!(matches!(
            bad_scheme.validated_backend_url(),
            Err(ErpError::Config(_))
        ));

        let relative = Settings::default().with_backend_url(Some("/api".into()));
        assert!(relative.validated_backend_url().is_err());
    }
}
