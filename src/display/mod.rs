//! Display formatting for terminal output
//!
//! Number, timestamp and empty-value formatting shared by the list views.

pub mod number;
pub mod timestamp;

pub use number::format_number_id;
pub use timestamp::{format_optional_timestamp, format_timestamp};

/// Placeholder for absent values in tables
pub const DASH: &str = "-";

/// Show a value, or `-` when it is missing or empty
pub fn or_dash(value: Option<&str>) -> &str {
    match value {
        Some(v) if !v.is_empty() => v,
        _ => DASH,
    }
}
