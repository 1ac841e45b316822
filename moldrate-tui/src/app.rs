//! Application state — single-owner, main-thread only.
//!
//! Every field mutation goes through an edit method that re-derives the
//! parsed snapshot and the projection, so the renderer never sees a
//! stale result.

use moldrate_core::{parse_or_zero, CalculatorInputs, RawInputs, Throughput, COMMON_CAVITY_COUNTS};

/// Which form field holds the cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    CycleHours,
    CycleMinutes,
    CycleSeconds,
    CavityCount,
    RunningHours,
}

impl Field {
    pub fn index(self) -> usize {
        match self {
            Field::CycleHours => 0,
            Field::CycleMinutes => 1,
            Field::CycleSeconds => 2,
            Field::CavityCount => 3,
            Field::RunningHours => 4,
        }
    }

    pub fn from_index(i: usize) -> Option<Self> {
        match i {
            0 => Some(Field::CycleHours),
            1 => Some(Field::CycleMinutes),
            2 => Some(Field::CycleSeconds),
            3 => Some(Field::CavityCount),
            4 => Some(Field::RunningHours),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Field::CycleHours => "Hours",
            Field::CycleMinutes => "Minutes",
            Field::CycleSeconds => "Seconds",
            Field::CavityCount => "Cavity Count",
            Field::RunningHours => "Running Hours/Day",
        }
    }

    /// Inline hint shown next to the focused field.
    pub fn hint(self) -> &'static str {
        match self {
            Field::CavityCount => "[c] common counts",
            Field::RunningHours => "8 single / 16 double / 24 continuous",
            _ => "",
        }
    }

    pub fn next(self) -> Field {
        Field::from_index((self.index() + 1) % 5).unwrap()
    }

    pub fn prev(self) -> Field {
        Field::from_index((self.index() + 4) % 5).unwrap()
    }
}

/// Which overlay (if any) is shown on top.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Overlay {
    None,
    CavityPicker,
    Help,
}

/// A worked example loadable into the form with one key.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub cycle_hours: &'static str,
    pub cycle_minutes: &'static str,
    pub cycle_seconds: &'static str,
    pub cavity_count: &'static str,
    pub running_hours: &'static str,
}

/// The worked examples: single shift, double shift, continuous.
pub const PRESETS: [Preset; 3] = [
    Preset {
        name: "Single cavity, single shift",
        cycle_hours: "",
        cycle_minutes: "2",
        cycle_seconds: "30",
        cavity_count: "1",
        running_hours: "8",
    },
    Preset {
        name: "Multi-cavity, double shift",
        cycle_hours: "",
        cycle_minutes: "",
        cycle_seconds: "45",
        cavity_count: "8",
        running_hours: "16",
    },
    Preset {
        name: "High volume, continuous",
        cycle_hours: "",
        cycle_minutes: "",
        cycle_seconds: "30",
        cavity_count: "32",
        running_hours: "24",
    },
];

/// Top-level application state.
pub struct AppState {
    // Form
    pub raw: RawInputs,
    pub focus: Field,

    // Overlays
    pub overlay: Overlay,
    pub picker_cursor: usize,

    // Cross-cutting
    pub status_message: Option<String>,
    pub running: bool,

    // Derived snapshot, recomputed on every mutation.
    pub inputs: CalculatorInputs,
    pub throughput: Throughput,
}

impl AppState {
    pub fn new() -> Self {
        let raw = RawInputs::default();
        let inputs = raw.parse();
        let throughput = Throughput::project(&inputs);
        Self {
            raw,
            focus: Field::CycleHours,
            overlay: Overlay::None,
            picker_cursor: 0,
            status_message: None,
            running: true,
            inputs,
            throughput,
        }
    }

    /// Re-derive the parsed snapshot and projection from the raw text.
    pub fn recompute(&mut self) {
        self.inputs = self.raw.parse();
        self.throughput = Throughput::project(&self.inputs);
    }

    pub fn field_text(&self, field: Field) -> &str {
        match field {
            Field::CycleHours => &self.raw.cycle_hours,
            Field::CycleMinutes => &self.raw.cycle_minutes,
            Field::CycleSeconds => &self.raw.cycle_seconds,
            Field::CavityCount => &self.raw.cavity_count,
            Field::RunningHours => &self.raw.running_hours_per_day,
        }
    }

    fn field_text_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::CycleHours => &mut self.raw.cycle_hours,
            Field::CycleMinutes => &mut self.raw.cycle_minutes,
            Field::CycleSeconds => &mut self.raw.cycle_seconds,
            Field::CavityCount => &mut self.raw.cavity_count,
            Field::RunningHours => &mut self.raw.running_hours_per_day,
        }
    }

    /// Append a character to the focused field. Only characters that can
    /// appear in a number are accepted; everything else is ignored.
    pub fn push_char(&mut self, c: char) {
        if c.is_ascii_digit() || c == '.' || c == '-' {
            self.field_text_mut(self.focus).push(c);
            self.recompute();
        }
    }

    pub fn backspace(&mut self) {
        self.field_text_mut(self.focus).pop();
        self.recompute();
    }

    pub fn clear_focused(&mut self) {
        self.field_text_mut(self.focus).clear();
        self.recompute();
    }

    /// Overwrite the cavity field (quick-pick path; last write wins).
    pub fn set_cavity(&mut self, count: u32) {
        self.raw.cavity_count = count.to_string();
        self.recompute();
    }

    /// Step the focused field. The cavity field cycles the quick-pick
    /// table instead of stepping numerically.
    pub fn step_focused(&mut self, direction: i32) {
        match self.focus {
            Field::CavityCount => self.cycle_cavity(direction),
            Field::RunningHours => self.step_numeric(0.5, direction),
            _ => self.step_numeric(1.0, direction),
        }
    }

    fn step_numeric(&mut self, step: f64, direction: i32) {
        let current = parse_or_zero(self.field_text(self.focus));
        let next = (current + step * f64::from(direction)).max(0.0);
        // Stepping writes canonical text; integers lose the trailing ".0"
        // so the result matches what a user would type.
        *self.field_text_mut(self.focus) = if next.fract() == 0.0 {
            format!("{next:.0}")
        } else {
            format!("{next}")
        };
        self.recompute();
    }

    /// Move to the next (or previous) table entry relative to the
    /// current value, wrapping at the ends.
    fn cycle_cavity(&mut self, direction: i32) {
        let current = parse_or_zero(&self.raw.cavity_count);
        let idx = if direction > 0 {
            COMMON_CAVITY_COUNTS
                .iter()
                .position(|&c| f64::from(c) > current)
                .unwrap_or(0)
        } else {
            COMMON_CAVITY_COUNTS
                .iter()
                .rposition(|&c| f64::from(c) < current)
                .unwrap_or(COMMON_CAVITY_COUNTS.len() - 1)
        };
        self.set_cavity(COMMON_CAVITY_COUNTS[idx]);
    }

    /// Load one of the worked examples into the form.
    pub fn apply_preset(&mut self, preset: &Preset) {
        self.raw = RawInputs {
            cycle_hours: preset.cycle_hours.to_string(),
            cycle_minutes: preset.cycle_minutes.to_string(),
            cycle_seconds: preset.cycle_seconds.to_string(),
            cavity_count: preset.cavity_count.to_string(),
            running_hours_per_day: preset.running_hours.to_string(),
        };
        self.recompute();
        self.set_status(format!("Loaded: {}", preset.name));
    }

    /// Set a status message for the bottom bar.
    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(msg.into());
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_cycle() {
        assert_eq!(Field::CycleHours.next(), Field::CycleMinutes);
        assert_eq!(Field::RunningHours.next(), Field::CycleHours);
        assert_eq!(Field::CycleHours.prev(), Field::RunningHours);
        assert_eq!(Field::CavityCount.prev(), Field::CycleSeconds);
    }

    #[test]
    fn field_from_index() {
        for i in 0..5 {
            let f = Field::from_index(i).unwrap();
            assert_eq!(f.index(), i);
        }
        assert!(Field::from_index(5).is_none());
    }

    #[test]
    fn new_app_defaults_to_single_shift_and_zero_output() {
        let app = AppState::new();
        assert_eq!(app.inputs.running_hours_per_day, 8.0);
        assert!(app.throughput.is_zero());
    }

    #[test]
    fn typing_recomputes_immediately() {
        let mut app = AppState::new();
        app.focus = Field::CycleSeconds;
        app.push_char('4');
        app.push_char('5');
        app.focus = Field::CavityCount;
        app.push_char('8');
        // 45s cycle, 8 cavities, default 8h day
        assert!((app.throughput.units_per_hour - 640.0).abs() < 1e-6);
        assert!((app.throughput.units_per_day - 5120.0).abs() < 1e-6);
    }

    #[test]
    fn non_numeric_characters_are_ignored() {
        let mut app = AppState::new();
        app.focus = Field::CycleSeconds;
        app.push_char('4');
        app.push_char('e');
        app.push_char(' ');
        assert_eq!(app.raw.cycle_seconds, "4");
    }

    #[test]
    fn backspace_and_clear_edit_the_focused_field() {
        let mut app = AppState::new();
        app.focus = Field::CycleMinutes;
        app.push_char('1');
        app.push_char('2');
        app.backspace();
        assert_eq!(app.raw.cycle_minutes, "1");
        app.clear_focused();
        assert_eq!(app.raw.cycle_minutes, "");
        assert!(app.throughput.is_zero());
    }

    #[test]
    fn quick_pick_overwrites_typed_text() {
        let mut app = AppState::new();
        app.focus = Field::CavityCount;
        app.push_char('7');
        app.push_char('0');
        app.set_cavity(72);
        assert_eq!(app.raw.cavity_count, "72");
    }

    #[test]
    fn cavity_cycling_walks_the_table() {
        let mut app = AppState::new();
        app.focus = Field::CavityCount;
        app.step_focused(1);
        assert_eq!(app.raw.cavity_count, "1");
        app.step_focused(1);
        assert_eq!(app.raw.cavity_count, "2");
        app.step_focused(-1);
        assert_eq!(app.raw.cavity_count, "1");
        // Wraps at both ends.
        app.step_focused(-1);
        assert_eq!(app.raw.cavity_count, "72");
        app.step_focused(1);
        assert_eq!(app.raw.cavity_count, "1");
    }

    #[test]
    fn cavity_cycling_from_uncommon_value_snaps_to_table() {
        let mut app = AppState::new();
        app.focus = Field::CavityCount;
        app.raw.cavity_count = "10".into();
        app.step_focused(1);
        assert_eq!(app.raw.cavity_count, "12");
        app.raw.cavity_count = "10".into();
        app.step_focused(-1);
        assert_eq!(app.raw.cavity_count, "8");
    }

    #[test]
    fn stepping_floors_at_zero_without_going_negative() {
        let mut app = AppState::new();
        app.focus = Field::CycleSeconds;
        app.step_focused(-1);
        assert_eq!(app.raw.cycle_seconds, "0");
        app.focus = Field::RunningHours;
        app.step_focused(1);
        assert_eq!(app.raw.running_hours_per_day, "8.5");
    }

    #[test]
    fn preset_loads_the_documented_example() {
        let mut app = AppState::new();
        app.apply_preset(&PRESETS[0]);
        assert_eq!(app.inputs.total_cycle_seconds(), 150.0);
        assert!((app.throughput.units_per_day - 192.0).abs() < 1e-9);
        assert!(app.status_message.is_some());
    }
}
