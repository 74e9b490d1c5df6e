//! Overlays drawn on top of the current view

pub mod help;
