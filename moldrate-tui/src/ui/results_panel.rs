//! Right column — the six projected throughput metrics.

use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use moldrate_core::format_value;

use crate::app::AppState;
use crate::theme;

pub fn render(f: &mut Frame, area: Rect, app: &AppState) {
    let t = &app.throughput;
    let running = if app.raw.running_hours_per_day.is_empty() {
        "0"
    } else {
        app.raw.running_hours_per_day.as_str()
    };

    let mut lines: Vec<Line> = Vec::new();

    if t.is_zero() {
        lines.push(Line::from(Span::styled(
            "Enter a cycle time and cavity count to project output.",
            theme::muted(),
        )));
        lines.push(Line::from(""));
    }

    metric(&mut lines, "Units per Second", t.units_per_second, theme::accent(), None);
    metric(&mut lines, "Units per Minute", t.units_per_minute, theme::accent(), None);
    metric(&mut lines, "Units per Hour", t.units_per_hour, theme::accent(), None);
    metric(
        &mut lines,
        "Units per Day",
        t.units_per_day,
        theme::warning(),
        Some(format!("based on {running} running hours")),
    );
    metric(
        &mut lines,
        "Units per Week",
        t.units_per_week,
        theme::positive(),
        Some(format!("7 days x {running} hours/day")),
    );
    metric(
        &mut lines,
        "Units per Month",
        t.units_per_month,
        theme::positive(),
        Some(format!("30 days x {running} hours/day")),
    );

    let para = Paragraph::new(lines);
    f.render_widget(para, area);
}

fn metric(
    lines: &mut Vec<Line<'static>>,
    label: &str,
    value: f64,
    style: Style,
    sub: Option<String>,
) {
    lines.push(Line::from(vec![
        Span::styled(format!("{:>18}  ", label), theme::muted()),
        Span::styled(format_value(value), style.add_modifier(Modifier::BOLD)),
    ]));
    if let Some(sub) = sub {
        lines.push(Line::from(vec![
            Span::raw(" ".repeat(20)),
            Span::styled(sub, theme::secondary()),
        ]));
    }
    lines.push(Line::from(""));
}
