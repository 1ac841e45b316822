//! Neon-on-charcoal theme tokens shared by every panel.
//!
//! Style helpers rather than raw colors so panels stay declarative:
//! `theme::accent()`, `theme::muted()`, and so on.

use ratatui::style::{Color, Modifier, Style};

/// Electric cyan — focus, highlights.
const ACCENT: Color = Color::Rgb(0, 255, 255);
/// Neon green — headline results.
const POSITIVE: Color = Color::Rgb(0, 255, 128);
/// Neon orange — the scheduled-hours-based metrics.
const WARNING: Color = Color::Rgb(255, 140, 0);
/// Cool purple — secondary info.
const NEUTRAL: Color = Color::Rgb(147, 112, 219);
/// Steel blue — labels, hints, disabled.
const MUTED: Color = Color::Rgb(100, 149, 237);
/// Light gray — secondary text.
const TEXT_SECONDARY: Color = Color::Rgb(170, 170, 170);

pub fn accent() -> Style {
    Style::default().fg(ACCENT)
}

pub fn accent_bold() -> Style {
    Style::default().fg(ACCENT).add_modifier(Modifier::BOLD)
}

pub fn positive() -> Style {
    Style::default().fg(POSITIVE)
}

pub fn warning() -> Style {
    Style::default().fg(WARNING)
}

pub fn neutral() -> Style {
    Style::default().fg(NEUTRAL)
}

pub fn muted() -> Style {
    Style::default().fg(MUTED)
}

pub fn secondary() -> Style {
    Style::default().fg(TEXT_SECONDARY)
}

pub fn panel_border(active: bool) -> Style {
    if active {
        accent()
    } else {
        muted()
    }
}

pub fn panel_title(active: bool) -> Style {
    if active {
        accent_bold()
    } else {
        muted()
    }
}
