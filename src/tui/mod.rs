//! Terminal User Interface module
//!
//! Renders the tab shell and the resource panels with ratatui. Panel state
//! lives in `crate::panels`; this module only draws it and routes keys.

pub mod app;
pub mod event;
pub mod handler;
pub mod terminal;

// Views
pub mod views;

// Widgets
pub mod widgets;

// Overlays
pub mod dialogs;

// Layout
pub mod layout;

pub use app::App;
pub use terminal::run_tui;
