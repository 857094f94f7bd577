// Status bar widget: dataset, goal count, active section and toggles.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::AppState;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState, app: &AppState) {
    let paragraph = Paragraph::new(Line::from(status_spans(state, app)))
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, area);
}

/// Spans shown left to right in the status bar.
pub fn status_spans(state: &ViewState, app: &AppState) -> Vec<Span<'static>> {
    let sep = || Span::styled(" | ", Style::default().fg(Color::Gray));
    let controls = &state.controls;

    let mut spans = vec![
        Span::styled(
            format!(" {} ", state.source),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("{} goals", state.total_goals),
            Style::default().fg(Color::White),
        ),
        sep(),
        Span::styled(
            state.section.title().to_string(),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        sep(),
        Span::raw(format!("Order: {}", controls.order.label())),
        sep(),
        Span::raw(format!(
            "Values: {}",
            if controls.show_values { "on" } else { "off" }
        )),
        sep(),
        Span::raw(format!("Color: {}", app.color(controls))),
    ];

    if let Some(value) = app.slider_value(state.section, controls) {
        spans.push(sep());
        spans.push(Span::raw(format!("N: {value}")));
    }
    spans
}
