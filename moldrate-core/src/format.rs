//! Display formatting for derived values.

/// Three-tier display rule.
///
/// - exactly zero renders as `"0"`
/// - below 1, four decimal digits (fractional per-second rates)
/// - below 100, two decimal digits
/// - otherwise, round to the nearest integer with comma grouping
pub fn format_value(v: f64) -> String {
    if v == 0.0 {
        "0".to_string()
    } else if v < 1.0 {
        format!("{v:.4}")
    } else if v < 100.0 {
        format!("{v:.2}")
    } else {
        group_thousands(v.round())
    }
}

/// Comma-group an already-rounded value. Only values >= 100 reach this
/// path, so there is no sign or fraction to carry.
fn group_thousands(v: f64) -> String {
    let digits = format!("{v:.0}");
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let chars: Vec<char> = digits.chars().collect();
    for (i, ch) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(*ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_renders_bare() {
        assert_eq!(format_value(0.0), "0");
        assert_eq!(format_value(-0.0), "0");
    }

    #[test]
    fn small_values_get_four_decimals() {
        assert_eq!(format_value(0.5), "0.5000");
        assert_eq!(format_value(0.0027), "0.0027");
        assert_eq!(format_value(0.17777777), "0.1778");
    }

    #[test]
    fn mid_values_get_two_decimals() {
        assert_eq!(format_value(45.678), "45.68");
        assert_eq!(format_value(1.0), "1.00");
        assert_eq!(format_value(99.999), "100.00");
    }

    #[test]
    fn large_values_round_and_group() {
        assert_eq!(format_value(1234.5), "1,235");
        assert_eq!(format_value(100.0), "100");
        assert_eq!(format_value(307_200.0), "307,200");
        assert_eq!(format_value(1_234_567.4), "1,234,567");
    }

    #[test]
    fn grouping_boundaries() {
        assert_eq!(format_value(999.4), "999");
        assert_eq!(format_value(999.5), "1,000");
        assert_eq!(format_value(1_000_000.0), "1,000,000");
    }
}
