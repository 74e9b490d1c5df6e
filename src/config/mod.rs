//! Configuration module for Linqkeun
//!
//! This module provides configuration management including:
//! - Platform config directory resolution
//! - Settings file loading and CLI/env overrides
//! - Backend URL validation

pub mod paths;
pub mod settings;

pub use paths::LinqkeunPaths;
pub use settings::Settings;
