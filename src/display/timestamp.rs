//! Timestamp formatting for list views

use chrono::{DateTime, Local, NaiveDateTime, TimeZone};

/// Display format for timestamps (local time, `id-ID` style)
const DISPLAY_FORMAT: &str = "%d/%m/%Y, %H.%M.%S";

/// Format a backend timestamp in local time
///
/// RFC 3339 values are converted to local time. Values without an offset
/// are taken as local wall-clock time. Anything unparsable is returned
/// unchanged.
pub fn format_timestamp(raw: &str) -> String {
    parse_timestamp(raw)
        .map(|dt| dt.format(DISPLAY_FORMAT).to_string())
        .unwrap_or_else(|| raw.to_string())
}

fn parse_timestamp(raw: &str) -> Option<DateTime<Local>> {
    let raw = raw.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Local));
    }

    ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"]
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
        .and_then(|naive| Local.from_local_datetime(&naive).earliest())
}

/// Format an optional timestamp, using `-` when it is absent or empty
pub fn format_optional_timestamp(raw: Option<&str>) -> String {
    match raw {
        Some(value) if !value.is_empty() => format_timestamp(value),
        _ => super::DASH.to_string(),
    }
}
