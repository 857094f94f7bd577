// Main panel widget: stacks the items of a `PanelContent` vertically.
//
// Fixed-height items (text, metrics, pickers, errors) take what they need;
// charts and tables share the remaining space.

use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, Paragraph, Row, Table};
use ratatui::Frame;

use goalboard_core::stats::Share;

use super::bar_chart;
use crate::app::{PanelContent, PanelItem, PickerOption};

/// Rows shown in a picker before it stops growing.
const MAX_PICKER_ROWS: usize = 8;
/// Width of the share bar at 100%.
const SHARE_BAR_WIDTH: f64 = 20.0;

pub fn render(frame: &mut Frame, area: Rect, panel: &PanelContent) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan))
        .title(Span::styled(
            format!(" {} ", panel.title),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let constraints: Vec<Constraint> = panel.items.iter().map(item_constraint).collect();
    let areas = Layout::vertical(constraints).split(inner);

    for (item, item_area) in panel.items.iter().zip(areas.iter()) {
        render_item(frame, *item_area, item);
    }
}

fn item_constraint(item: &PanelItem) -> Constraint {
    match item {
        PanelItem::Text(lines) => Constraint::Length(lines.len() as u16),
        PanelItem::Metric { .. } | PanelItem::Error(_) => Constraint::Length(3),
        PanelItem::Picker { options, .. } => {
            Constraint::Length((options.len().min(MAX_PICKER_ROWS) + 2) as u16)
        }
        PanelItem::Bars(_) | PanelItem::Shares { .. } | PanelItem::Table { .. } => {
            Constraint::Fill(1)
        }
    }
}

fn render_item(frame: &mut Frame, area: Rect, item: &PanelItem) {
    match item {
        PanelItem::Text(lines) => {
            let text: Vec<Line> = lines.iter().map(|l| Line::from(l.as_str())).collect();
            frame.render_widget(Paragraph::new(text), area);
        }
        PanelItem::Metric { label, value } => {
            let paragraph = Paragraph::new(Line::from(Span::styled(
                value.as_str(),
                Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
            )))
            .block(Block::default().borders(Borders::ALL).title(label.as_str()));
            frame.render_widget(paragraph, area);
        }
        PanelItem::Bars(series) => bar_chart::render(frame, area, series),
        PanelItem::Shares { title, shares } => render_shares(frame, area, title, shares),
        PanelItem::Table {
            title,
            headers,
            rows,
        } => {
            let header = Row::new(headers.iter().map(String::as_str))
                .style(Style::default().add_modifier(Modifier::BOLD));
            let body = rows.iter().map(|r| Row::new(r.iter().map(String::as_str)));
            let table = Table::new(body, [Constraint::Fill(1), Constraint::Length(8)])
                .header(header)
                .block(Block::default().borders(Borders::ALL).title(title.as_str()));
            frame.render_widget(table, area);
        }
        PanelItem::Picker {
            title,
            options,
            cursor,
        } => render_picker(frame, area, title, options, *cursor),
        PanelItem::Error(message) => {
            let paragraph = Paragraph::new(message.as_str())
                .style(Style::default().fg(Color::Red))
                .block(
                    Block::default()
                        .borders(Borders::ALL)
                        .border_style(Style::default().fg(Color::Red))
                        .title("Error"),
                );
            frame.render_widget(paragraph, area);
        }
    }
}

fn render_picker(frame: &mut Frame, area: Rect, title: &str, options: &[PickerOption], cursor: usize) {
    // Keep the cursor row visible once the list is taller than the area.
    let visible = (area.height as usize).saturating_sub(2).max(1);
    let offset = (cursor + 1).saturating_sub(visible);

    let items: Vec<ListItem> = options
        .iter()
        .enumerate()
        .skip(offset)
        .take(visible)
        .map(|(i, option)| {
            let mark = if option.selected { "[x]" } else { "[ ]" };
            let style = if i == cursor {
                Style::default().fg(Color::Black).bg(Color::White)
            } else {
                Style::default()
            };
            ListItem::new(Line::from(Span::styled(format!("{mark} {}", option.label), style)))
        })
        .collect();

    let selected = options.iter().filter(|o| o.selected).count();
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!("{title} ({selected}/{})", options.len())),
    );
    frame.render_widget(list, area);
}

/// Share-of-total table: label, count, percentage and a proportional bar.
fn render_shares(frame: &mut Frame, area: Rect, title: &str, shares: &[Share]) {
    let rows = shares.iter().map(|share| {
        let width = (share.percent / 100.0 * SHARE_BAR_WIDTH).round() as usize;
        Row::new(vec![
            share.label.clone(),
            share.count.to_string(),
            format!("{:.1}%", share.percent),
            "█".repeat(width),
        ])
    });
    let table = Table::new(
        rows,
        [
            Constraint::Fill(1),
            Constraint::Length(6),
            Constraint::Length(7),
            Constraint::Length(SHARE_BAR_WIDTH as u16),
        ],
    )
    .header(
        Row::new(vec!["Label", "Goals", "Share", ""])
            .style(Style::default().add_modifier(Modifier::BOLD)),
    )
    .block(Block::default().borders(Borders::ALL).title(title));
    frame.render_widget(table, area);
}
