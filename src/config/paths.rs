//! Path management for Linqkeun
//!
//! ## Path Resolution Order
//!
//! 1. `LINQKEUN_CONFIG_DIR` environment variable (if set)
//! 2. The platform config directory from `directories`
//!    (e.g. `~/.config/linqkeun` on Linux)

use std::path::{Path, PathBuf};

use directories::ProjectDirs;

use crate::error::ErpError;

/// Environment variable overriding the config directory
pub const CONFIG_DIR_ENV: &str = "LINQKEUN_CONFIG_DIR";

/// Manages all paths used by Linqkeun
#[derive(Debug, Clone)]
pub struct LinqkeunPaths {
    base_dir: PathBuf,
}

impl LinqkeunPaths {
    /// Create a new LinqkeunPaths instance
    ///
    /// # Errors
    ///
    /// Returns an error if no home directory can be determined and no
    /// override is set.
    pub fn new() -> Result<Self, ErpError> {
        let base_dir = if let Ok(custom) = std::env::var(CONFIG_DIR_ENV) {
            PathBuf::from(custom)
        } else {
            ProjectDirs::from("id", "linqkeun", "linqkeun")
                .map(|dirs| dirs.config_dir().to_path_buf())
                .ok_or_else(|| {
                    ErpError::Config("Could not determine config directory".into())
                })?
        };

        Ok(Self { base_dir })
    }

    /// Create LinqkeunPaths with a custom base directory (useful for testing)
    pub fn with_base_dir(base_dir: PathBuf) -> Self {
        Self { base_dir }
    }

    /// Get the base directory
    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    /// Get the path to the settings file
    pub fn settings_file(&self) -> PathBuf {
        self.base_dir.join("config.json")
    }

    /// Get the path to the log file
    pub fn log_file(&self) -> PathBuf {
        self.base_dir.join("linqkeun.log")
    }

    /// Ensure the base directory exists
    pub fn ensure_directories(&self) -> Result<(), ErpError> {
        std::fs::create_dir_all(&self.base_dir)
            .map_err(|e| ErpError::Io(format!("Failed to create config directory: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_custom_base_dir() {
        let temp_dir = TempDir::new().unwrap();
        let paths = LinqkeunPaths::with_base_dir(temp_dir.path().to_path_buf());

        assert_eq!(paths.base_dir(), temp_dir.path());
        assert_eq!(paths.settings_file(), temp_dir.path().join("config.json"));
        assert_eq!(paths.log_file(), temp_dir.path().join("linqkeun.log"));
    }

    #[test]
    fn test_ensure_directories() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let paths = LinqkeunPaths::with_base_dir(nested.clone());

        paths.ensure_directories().unwrap();

        assert!(nested.exists());
    }
}
