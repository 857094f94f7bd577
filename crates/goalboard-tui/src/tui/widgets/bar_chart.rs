// Horizontal bar chart for a `BarSeries`.

use std::str::FromStr;

use ratatui::layout::{Direction, Rect};
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph};
use ratatui::Frame;
use tracing::warn;

use crate::app::BarSeries;

/// Bar values are integers; fractional series keep one decimal of precision.
const VALUE_SCALE: f64 = 10.0;

pub fn render(frame: &mut Frame, area: Rect, series: &BarSeries) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(series.title.as_str());

    if series.bars.is_empty() {
        let paragraph = Paragraph::new("  No goals for this selection.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let color = parse_color(&series.color);
    let bars: Vec<Bar> = series
        .bars
        .iter()
        .map(|datum| {
            let text = if series.show_values {
                datum.display.clone()
            } else {
                String::new()
            };
            Bar::default()
                .value((datum.value.max(0.0) * VALUE_SCALE).round() as u64)
                .label(Line::from(datum.label.clone()))
                .text_value(text)
        })
        .collect();

    let chart = BarChart::default()
        .block(block)
        .direction(Direction::Horizontal)
        .bar_width(1)
        .bar_gap(0)
        .bar_style(Style::default().fg(color))
        .value_style(Style::default().fg(Color::Black).bg(color))
        .data(BarGroup::default().bars(&bars));
    frame.render_widget(chart, area);
}

/// Resolve a palette color name, falling back to cyan.
pub fn parse_color(name: &str) -> Color {
    Color::from_str(name).unwrap_or_else(|_| {
        warn!(color = name, "unknown color name, using cyan");
        Color::Cyan
    })
}
