// Sidebar widget: the section menu with the active entry highlighted.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem};
use ratatui::Frame;

use crate::app::Section;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let items: Vec<ListItem> = Section::ALL
        .iter()
        .map(|section| menu_item(*section, *section == state.section))
        .collect();

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title("Sections"),
    );
    frame.render_widget(list, area);
}

fn menu_item(section: Section, active: bool) -> ListItem<'static> {
    let (marker, style) = if active {
        (
            "> ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
    } else {
        ("  ", Style::default().fg(Color::White))
    };
    ListItem::new(Line::from(Span::styled(
        format!("{marker}{}", section.title()),
        style,
    )))
}
