//! Linqkeun - terminal client for a small Mini ERP backend
//!
//! This library provides a create/list client over a REST API for customers,
//! products and invoices, with a ratatui front end organised in tabs.
//!
//! # Architecture
//!
//! The crate is organized into the following modules:
//!
//! - `config`: Configuration and path management
//! - `error`: Custom error types
//! - `logging`: File-backed tracing setup
//! - `models`: Resource models as sent by the backend
//! - `api`: The `Backend` seam, its HTTP implementation and typed helpers
//! - `display`: Number and timestamp formatting
//! - `panels`: Per-tab state, request spawning and outcome handling
//! - `tui`: Terminal rendering and key handling
//!
//! # Example
//!
//! ```rust,ignore
//! use linqkeun::config::{LinqkeunPaths, Settings};
//!
//! let paths = LinqkeunPaths::new()?;
//! let settings = Settings::load_or_default(&paths)?;
//! linqkeun::tui::run_tui(&settings)?;
//! ```

pub mod api;
pub mod config;
pub mod display;
pub mod error;
pub mod logging;
pub mod models;
pub mod panels;
pub mod tui;

pub use error::{ErpError, ErpResult};
