//! Form inputs — raw field text and the parsed scalar snapshot.

use serde::{Deserialize, Serialize};

/// The five form fields exactly as typed.
///
/// Empty or malformed text is legal at all times; [`RawInputs::parse`]
/// degrades it to a zero contribution rather than raising an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub cycle_hours: String,
    pub cycle_minutes: String,
    pub cycle_seconds: String,
    pub cavity_count: String,
    pub running_hours_per_day: String,
}

impl Default for RawInputs {
    fn default() -> Self {
        Self {
            cycle_hours: String::new(),
            cycle_minutes: String::new(),
            cycle_seconds: String::new(),
            cavity_count: String::new(),
            // Single shift is the default schedule.
            running_hours_per_day: "8".to_string(),
        }
    }
}

impl RawInputs {
    /// Parse every field with [`parse_or_zero`].
    pub fn parse(&self) -> CalculatorInputs {
        CalculatorInputs {
            cycle_hours: parse_or_zero(&self.cycle_hours),
            cycle_minutes: parse_or_zero(&self.cycle_minutes),
            cycle_seconds: parse_or_zero(&self.cycle_seconds),
            cavity_count: parse_or_zero(&self.cavity_count),
            running_hours_per_day: parse_or_zero(&self.running_hours_per_day),
        }
    }
}

/// Parse a field as `f64`. Empty, malformed, or non-finite text yields
/// `0.0` — invalid input is never an error, only a zero contribution.
pub fn parse_or_zero(raw: &str) -> f64 {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
        .unwrap_or(0.0)
}

/// Parsed scalar snapshot of the form.
///
/// The running-hours field is carried raw: values above 24 or below 0
/// are not clamped anywhere downstream.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CalculatorInputs {
    pub cycle_hours: f64,
    pub cycle_minutes: f64,
    pub cycle_seconds: f64,
    pub cavity_count: f64,
    pub running_hours_per_day: f64,
}

impl CalculatorInputs {
    /// Combined cycle time: `h*3600 + m*60 + s`.
    pub fn total_cycle_seconds(&self) -> f64 {
        self.cycle_hours * 3600.0 + self.cycle_minutes * 60.0 + self.cycle_seconds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_accepts_plain_numbers() {
        assert_eq!(parse_or_zero("45"), 45.0);
        assert_eq!(parse_or_zero("2.5"), 2.5);
        assert_eq!(parse_or_zero("  3 "), 3.0);
        assert_eq!(parse_or_zero("-4"), -4.0);
    }

    #[test]
    fn parse_degrades_invalid_text_to_zero() {
        assert_eq!(parse_or_zero(""), 0.0);
        assert_eq!(parse_or_zero("abc"), 0.0);
        assert_eq!(parse_or_zero("1.2.3"), 0.0);
        assert_eq!(parse_or_zero("12 minutes"), 0.0);
    }

    #[test]
    fn parse_degrades_non_finite_to_zero() {
        assert_eq!(parse_or_zero("NaN"), 0.0);
        assert_eq!(parse_or_zero("inf"), 0.0);
        assert_eq!(parse_or_zero("-inf"), 0.0);
    }

    #[test]
    fn default_running_hours_is_single_shift() {
        let inputs = RawInputs::default().parse();
        assert_eq!(inputs.running_hours_per_day, 8.0);
        assert_eq!(inputs.total_cycle_seconds(), 0.0);
    }

    #[test]
    fn total_cycle_seconds_combines_components() {
        let inputs = CalculatorInputs {
            cycle_hours: 1.0,
            cycle_minutes: 2.0,
            cycle_seconds: 30.0,
            cavity_count: 1.0,
            running_hours_per_day: 8.0,
        };
        assert_eq!(inputs.total_cycle_seconds(), 3750.0);
    }

    #[test]
    fn fractional_components_are_preserved() {
        let raw = RawInputs {
            cycle_minutes: "0.5".into(),
            ..RawInputs::default()
        };
        assert_eq!(raw.parse().total_cycle_seconds(), 30.0);
    }
}
