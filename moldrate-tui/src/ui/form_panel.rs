//! Left column — the five editable fields plus the settings echo.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use moldrate_core::cavity::is_common;
use moldrate_core::{format_value, parse_or_zero};

use crate::app::{AppState, Field};
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let mut lines: Vec<Line> = Vec::new();

    lines.push(Line::from(Span::styled(
        "[j/k]field [h/l]step [c]avities [F1-F3]presets [?]help [q]uit",
        theme::muted(),
    )));
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Cycle Time", theme::accent_bold())));
    for field in [Field::CycleHours, Field::CycleMinutes, Field::CycleSeconds] {
        field_row(&mut lines, app, field);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled("Cavity Mold", theme::accent_bold())));
    field_row(&mut lines, app, Field::CavityCount);
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Machine Running Time",
        theme::accent_bold(),
    )));
    field_row(&mut lines, app, Field::RunningHours);
    lines.push(Line::from(""));

    // Settings echo — the values the projection is actually using.
    lines.push(Line::from(Span::styled(
        "Current Settings",
        theme::accent_bold(),
    )));
    echo_row(
        &mut lines,
        "Cycle Time",
        format!(
            "{} seconds",
            format_value(app.inputs.total_cycle_seconds())
        ),
    );
    echo_row(&mut lines, "Cavity Mold", or_zero(&app.raw.cavity_count));
    echo_row(
        &mut lines,
        "Running Hours/Day",
        format!("{} hours", or_zero(&app.raw.running_hours_per_day)),
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn field_row(lines: &mut Vec<Line<'static>>, app: &AppState, field: Field) {
    let is_focused = field == app.focus && app.overlay == crate::app::Overlay::None;

    let label_style = if is_focused {
        theme::accent().add_modifier(Modifier::REVERSED)
    } else {
        theme::muted()
    };

    let text = app.field_text(field);
    let mut spans = vec![Span::styled(format!("{:>18}: ", field.label()), label_style)];

    if is_focused {
        spans.push(Span::styled(text.to_string(), theme::accent_bold()));
        spans.push(Span::styled("_", theme::accent()));
        if !field.hint().is_empty() {
            spans.push(Span::styled(format!("  {}", field.hint()), theme::neutral()));
        }
    } else if text.is_empty() {
        spans.push(Span::styled("0".to_string(), theme::muted()));
    } else {
        // A recognized cavity layout reads as known-good.
        let style = if field == Field::CavityCount && is_common_layout(text) {
            theme::positive()
        } else {
            theme::secondary()
        };
        spans.push(Span::styled(text.to_string(), style));
    }

    lines.push(Line::from(spans));
}

fn echo_row(lines: &mut Vec<Line<'static>>, label: &str, value: impl Into<String>) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:>18}: ", label), theme::muted()),
        Span::styled(value.into(), theme::accent()),
    ]));
}

fn is_common_layout(text: &str) -> bool {
    let parsed = parse_or_zero(text);
    parsed > 0.0 && parsed.fract() == 0.0 && parsed <= f64::from(u32::MAX) && is_common(parsed as u32)
}

fn or_zero(text: &str) -> String {
    if text.is_empty() {
        "0".to_string()
    } else {
        text.to_string()
    }
}
