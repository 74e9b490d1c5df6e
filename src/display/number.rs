//! Indonesian number formatting
//!
//! Formats numbers the way the `id-ID` locale does: `.` groups thousands,
//! `,` separates decimals, and at most three fraction digits are kept
//! (rounded half away from zero, trailing zeros dropped).

/// Maximum number of fraction digits shown
const MAX_FRACTION_DIGITS: i32 = 3;

/// Format a number for display, e.g. `1234.5` → `1.234,5`
pub fn format_number_id(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let scale = 10f64.powi(MAX_FRACTION_DIGITS);
    let scaled = (value.abs() * scale).round();
    let int_part = (scaled / scale).trunc();
    let frac_part = (scaled - int_part * scale) as u64;

    let mut output = String::new();
    if value < 0.0 && scaled != 0.0 {
        output.push('-');
    }
    output.push_str(&group_thousands(&format!("{:.0}", int_part)));

    if frac_part > 0 {
        let digits = format!("{:0width$}", frac_part, width = MAX_FRACTION_DIGITS as usize);
        output.push(',');
        output.push_str(digits.trim_end_matches('0'));
    }

    output
}

/// Insert `.` between every group of three digits
fn group_thousands(digits: &str) -> String {
    let len = digits.len();
    let mut grouped = String::with_capacity(len + len / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_numbers() {
        assert_eq!(format_number_id(0.0), "0");
        assert_eq!(format_number_id(999.0), "999");
        assert_eq!(format_number_id(15000.0), "15.000");
        assert_eq!(format_number_id(30000.0), "30.000");
        assert_eq!(format_number_id(1234567.0), "1.234.567");
    }

    #[test]
    fn test_fractions() {
        assert_eq!(format_number_id(1234.5), "1.234,5");
        assert_eq!(format_number_id(0.1 + 0.2), "0,3");
        assert_eq!(format_number_id(2.25), "2,25");
        assert_eq!(format_number_id(1.23456), "1,235");
    }

    #[test]
    fn test_negative() {
        assert_eq!(format_number_id(-15000.0), "-15.000");
        assert_eq!(format_number_id(-0.0001), "0");
    }

    #[test]
    fn test_non_finite() {
        assert_eq!(format_number_id(f64::NAN), "NaN");
        assert_eq!(format_number_id(f64::INFINITY), "∞");
    }
}
