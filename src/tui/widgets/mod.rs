//! Reusable widgets for the TUI
//!
//! Presentational primitives shared by the panel views

pub mod badge;
pub mod card;
pub mod input;
pub mod section;

pub use badge::{badge, status_badge, BadgeColor};
pub use card::{MetricCard, CARD_HEIGHT};
pub use input::{LabeledInput, Selector, INPUT_HEIGHT};
pub use section::section;
