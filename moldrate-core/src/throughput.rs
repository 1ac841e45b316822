//! The projection — six throughput horizons derived from one snapshot.

use serde::{Deserialize, Serialize};

use crate::inputs::CalculatorInputs;

/// Days per week used for the weekly projection.
pub const DAYS_PER_WEEK: f64 = 7.0;

/// Fixed 30-day month approximation, not calendar-aware.
pub const DAYS_PER_MONTH: f64 = 30.0;

/// Projected output across six time horizons.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Throughput {
    pub units_per_second: f64,
    pub units_per_minute: f64,
    pub units_per_hour: f64,
    pub units_per_day: f64,
    pub units_per_week: f64,
    pub units_per_month: f64,
}

impl Throughput {
    /// Derive all six horizons from a parsed snapshot.
    ///
    /// Zero cycle time or zero cavity count collapses the projection to
    /// all-zero; there is no division-by-zero path. Day/week/month scale
    /// by the scheduled running hours, not a 24-hour day, and the weekly
    /// and monthly values multiply the unrounded daily value.
    pub fn project(inputs: &CalculatorInputs) -> Self {
        let total_cycle_seconds = inputs.total_cycle_seconds();
        if total_cycle_seconds == 0.0 || inputs.cavity_count == 0.0 {
            return Self::default();
        }

        let units_per_second = inputs.cavity_count / total_cycle_seconds;
        let units_per_minute = units_per_second * 60.0;
        let units_per_hour = units_per_minute * 60.0;
        let units_per_day = units_per_hour * inputs.running_hours_per_day;

        Self {
            units_per_second,
            units_per_minute,
            units_per_hour,
            units_per_day,
            units_per_week: units_per_day * DAYS_PER_WEEK,
            units_per_month: units_per_day * DAYS_PER_MONTH,
        }
    }

    /// True when the zero guard collapsed the projection.
    pub fn is_zero(&self) -> bool {
        self.units_per_second == 0.0
    }
}
