//! Overlay widgets — cavity quick-pick and help.

use ratatui::layout::Rect;
use ratatui::style::Modifier;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

use moldrate_core::COMMON_CAVITY_COUNTS;

use crate::app::{AppState, PRESETS};
use crate::theme;
use crate::ui::centered_rect;

/// Cavity quick-pick overlay.
pub fn render_cavity_picker(f: &mut Frame, area: Rect, app: &AppState) {
    let popup = centered_rect(36, 60, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Cavity Mold [Enter]select [Esc]cancel ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();
    for (i, count) in COMMON_CAVITY_COUNTS.iter().enumerate() {
        let is_cursor = i == app.picker_cursor;
        let style = if is_cursor {
            theme::accent().add_modifier(Modifier::REVERSED)
        } else {
            theme::muted()
        };
        lines.push(Line::from(Span::styled(
            format!("  {count:>3} cavity mold  "),
            style,
        )));
    }

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

/// Help overlay — key bindings and the worked examples.
pub fn render_help(f: &mut Frame, area: Rect) {
    let popup = centered_rect(70, 80, area);
    f.render_widget(Clear, popup);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme::accent())
        .title(" Help [Esc]close ")
        .title_style(theme::accent_bold());

    let inner = block.inner(popup);
    f.render_widget(block, popup);

    let mut lines: Vec<Line> = Vec::new();

    section(&mut lines, "Navigation");
    key(&mut lines, "j / k, Tab", "Move between fields");
    key(&mut lines, "q", "Quit");
    lines.push(Line::from(""));

    section(&mut lines, "Editing");
    key(&mut lines, "0-9 . -", "Type into the focused field");
    key(&mut lines, "Backspace", "Delete the last character");
    key(&mut lines, "x", "Clear the focused field");
    key(&mut lines, "h / l", "Step the field (cavity field cycles common counts)");
    lines.push(Line::from(""));

    section(&mut lines, "Cavity quick-pick");
    key(&mut lines, "c or Enter", "Open the common-count list");
    key(&mut lines, "j / k, Enter", "Choose a count");
    lines.push(Line::from(""));

    section(&mut lines, "Presets");
    for (i, preset) in PRESETS.iter().enumerate() {
        key_owned(&mut lines, format!("F{}", i + 1), preset.name);
    }
    lines.push(Line::from(""));

    lines.push(Line::from(Span::styled(
        "Every change recomputes the projection immediately.",
        theme::neutral(),
    )));

    let para = Paragraph::new(lines);
    f.render_widget(para, inner);
}

fn section(lines: &mut Vec<Line<'static>>, title: &str) {
    lines.push(Line::from(Span::styled(
        title.to_string(),
        theme::accent_bold(),
    )));
}

fn key(lines: &mut Vec<Line<'static>>, keys: &str, desc: &str) {
    key_owned(lines, keys.to_string(), desc);
}

fn key_owned(lines: &mut Vec<Line<'static>>, keys: String, desc: &str) {
    lines.push(Line::from(vec![
        Span::styled(format!("  {keys:>12}  "), theme::accent()),
        Span::styled(desc.to_string(), theme::muted()),
    ]));
}
