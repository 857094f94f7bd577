// Help bar widget: key hints for the active section.

use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::Section;
use crate::tui::ViewState;

pub fn render(frame: &mut Frame, area: Rect, state: &ViewState) {
    let paragraph = Paragraph::new(Line::from(Span::styled(
        help_text(state.section),
        Style::default().fg(Color::White).add_modifier(Modifier::DIM),
    )))
    .style(Style::default().bg(Color::DarkGray));
    frame.render_widget(paragraph, area);
}

/// Key hints: common keys first, then the ones the section reacts to.
pub fn help_text(section: Section) -> String {
    let extra = match section {
        Section::Home => "",
        Section::GoalsBySeason => " | [/]:Season | v:Values",
        Section::GoalsByCompetition => {
            " | [/]:Cursor | Space:Toggle | a:All | o:Order | ←/→:Top N | v:Values"
        }
        Section::AverageGoalMinute => " | ←/→:Seasons | c:Color | v:Values",
        Section::AssistProviders => " | ←/→:Top N | -/+:Table rows | c:Color | v:Values",
        Section::GoalsPerClub => " | k:Chart kind | v:Values",
        Section::MatchQuarters => " | [/]:Quarter | c:Color | v:Values",
        Section::GoalTypes => " | [/]:View | o:Order | ←/→:Top N | v:Values",
    };
    format!(" q:Quit | ↑/↓:Section{extra}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn help_text_lists_section_keys() {
        assert_eq!(help_text(Section::Home), " q:Quit | ↑/↓:Section");
        assert!(help_text(Section::GoalsByCompetition).contains("Space:Toggle"));
        assert!(help_text(Section::GoalsPerClub).contains("k:Chart kind"));
    }
}
