//! Numeric values as the backend sends them
//!
//! Prices and totals are numbers in the API contract, but the client does not
//! own the data: a record may carry a string, `null`, or nothing at all. The
//! `Amount` type keeps whatever arrived so it can be shown raw when it is not
//! a number.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

use crate::display::number::format_number_id;

/// A JSON number, or the raw JSON value when it is not one
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Amount {
    Number(f64),
    Raw(Value),
}

impl Amount {
    /// The numeric value, if this is a number
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            Self::Raw(_) => None,
        }
    }

    /// Whether the backend sent nothing (missing or `null`)
    pub fn is_missing(&self) -> bool {
        matches!(self, Self::Raw(Value::Null))
    }

    /// Locale-formatted number, or the raw value as-is
    pub fn display(&self) -> String {
        match self {
            Self::Number(n) => format_number_id(*n),
            Self::Raw(Value::Null) => String::new(),
            Self::Raw(Value::String(s)) => s.clone(),
            Self::Raw(other) => other.to_string(),
        }
    }
}

impl Default for Amount {
    fn default() -> Self {
        Self::Raw(Value::Null)
    }
}

impl From<f64> for Amount {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Coerce user input to a number
///
/// Surrounding whitespace is ignored. Empty, unparsable and non-finite input
/// all become 0. Only decimal notation (with an optional exponent) is
/// accepted: radix-prefixed strings such as `"0x10"` or `"0b11"` are
/// unparsable here and therefore 0, not 16 or 3.
pub fn coerce_number(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite())
        .unwrap_or(0.0)
}

/// Render a number the way it should appear in an editable field
///
/// Whole numbers drop the fractional part (`15000`, not `15000.0`).
pub fn number_to_field(n: f64) -> String {
    if n.fract() == 0.0 && n.abs() < 1e15 {
        format!("{}", n as i64)
    } else {
        n.to_string()
    }
}
