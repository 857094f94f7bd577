// Quit confirmation overlay, drawn on top of the dashboard while
// `ViewState::confirm_quit` is set.

use ratatui::layout::{Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};
use ratatui::Frame;

const DIALOG_WIDTH: u16 = 30;
const DIALOG_HEIGHT: u16 = 3;

pub fn render(frame: &mut Frame, area: Rect) {
    let dialog_area = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
    frame.render_widget(Clear, dialog_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            " Leave dashboard ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ));

    let bold = |color: Color| Style::default().fg(color).add_modifier(Modifier::BOLD);
    let text = Line::from(vec![
        Span::raw(" Really quit? ("),
        Span::styled("y", bold(Color::Green)),
        Span::raw("/"),
        Span::styled("n", bold(Color::Red)),
        Span::raw(")"),
    ]);

    let paragraph = Paragraph::new(text)
        .block(block)
        .style(Style::default().bg(Color::Black));
    frame.render_widget(paragraph, dialog_area);
}

/// A `width` x `height` rectangle centered in `area`, clamped to fit.
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let [row] = Layout::vertical([Constraint::Length(height.min(area.height))])
        .flex(Flex::Center)
        .areas(area);
    let [dialog] = Layout::horizontal([Constraint::Length(width.min(area.width))])
        .flex(Flex::Center)
        .areas(row);
    dialog
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_rect_is_centered() {
        let area = Rect::new(0, 0, 80, 24);
        let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        assert_eq!((dialog.width, dialog.height), (DIALOG_WIDTH, DIALOG_HEIGHT));
        let dx = (dialog.x + dialog.width / 2) as i32 - (area.width / 2) as i32;
        let dy = (dialog.y + dialog.height / 2) as i32 - (area.height / 2) as i32;
        assert!(dx.abs() <= 1 && dy.abs() <= 1, "off-center by ({dx}, {dy})");
    }

    #[test]
    fn centered_rect_clamps_to_small_area() {
        let area = Rect::new(0, 0, 10, 2);
        let dialog = centered_rect(DIALOG_WIDTH, DIALOG_HEIGHT, area);
        assert!(dialog.width <= area.width);
        assert!(dialog.height <= area.height);
    }
}
