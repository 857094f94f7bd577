// Screen layout: panel arrangement and sizing.
//
// +--------------------------------------------------+
// | Status Bar (1 row)                                |
// +----------------+---------------------------------+
// | Sidebar (26)   | Main Panel (fill)               |
// |                |                                 |
// +----------------+---------------------------------+
// | Help Bar (1 row)                                  |
// +--------------------------------------------------+

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Width of the section menu.
const SIDEBAR_WIDTH: u16 = 26;

/// Resolved screen areas for each dashboard zone.
#[derive(Debug, Clone)]
pub struct AppLayout {
    /// Top row: dataset name, goal count, active section.
    pub status_bar: Rect,
    /// Left column: section menu.
    pub sidebar: Rect,
    /// Right of the sidebar: the active section's panel.
    pub main_panel: Rect,
    /// Bottom row: keyboard shortcut hints.
    pub help_bar: Rect,
}

/// Build the dashboard layout from the available terminal area.
pub fn build_layout(area: Rect) -> AppLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // status bar
            Constraint::Min(5),    // sidebar + main panel
            Constraint::Length(1), // help bar
        ])
        .split(area);

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(20)])
        .split(vertical[1]);

    AppLayout {
        status_bar: vertical[0],
        sidebar: horizontal[0],
        main_panel: horizontal[1],
        help_bar: vertical[2],
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn test_area() -> Rect {
        Rect::new(0, 0, 120, 40)
    }

    #[test]
    fn layout_all_rects_nonzero() {
        let layout = build_layout(test_area());
        let rects = [
            ("status_bar", layout.status_bar),
            ("sidebar", layout.sidebar),
            ("main_panel", layout.main_panel),
            ("help_bar", layout.help_bar),
        ];
        for (name, rect) in &rects {
            assert!(
                rect.width > 0 && rect.height > 0,
                "{} has zero area: {:?}",
                name,
                rect
            );
        }
    }

    #[test]
    fn layout_bars_are_one_row() {
        let layout = build_layout(test_area());
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.help_bar.height, 1);
        assert_eq!(layout.help_bar.y, 39);
    }

    #[test]
    fn layout_sidebar_left_of_main_panel() {
        let layout = build_layout(test_area());
        assert_eq!(layout.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(layout.main_panel.x, layout.sidebar.x + layout.sidebar.width);
        assert_eq!(layout.sidebar.height, layout.main_panel.height);
    }

    #[test]
    fn layout_fills_width() {
        let area = test_area();
        let layout = build_layout(area);
        assert_eq!(layout.sidebar.width + layout.main_panel.width, area.width);
    }

    #[test]
    fn layout_small_terminal_still_valid() {
        let area = Rect::new(0, 0, 40, 8);
        let layout = build_layout(area);
        assert!(layout.main_panel.right() <= area.right());
        assert!(layout.help_bar.bottom() <= area.bottom());
    }
}
