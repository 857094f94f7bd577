// Keyboard input handling.
//
// Translates crossterm key events into `ViewState` mutations: section
// navigation and the per-section widget controls. Selector values are
// validated here, so the core only ever sees in-range enums and indices.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::{UserCommand, ViewState};
use crate::app::{AppState, Section};

/// Handle a keyboard event.
///
/// Returns `Some(UserCommand::Quit)` when the session should end. Every other
/// key is handled locally by mutating `ViewState`.
pub fn handle_key(
    key_event: KeyEvent,
    view_state: &mut ViewState,
    app: &AppState,
) -> Option<UserCommand> {
    // Only process key press events. On Windows, crossterm emits both
    // Press and Release events for each physical keypress.
    if key_event.kind != KeyEventKind::Press {
        return None;
    }

    // Ctrl+C always quits immediately regardless of mode
    if key_event.modifiers.contains(KeyModifiers::CONTROL)
        && key_event.code == KeyCode::Char('c')
    {
        return Some(UserCommand::Quit);
    }

    if view_state.confirm_quit {
        return handle_confirm_quit(key_event, view_state);
    }

    let section = view_state.section;
    let controls = &mut view_state.controls;

    match key_event.code {
        KeyCode::Up => view_state.section = section.prev(),
        KeyCode::Down => view_state.section = section.next(),

        KeyCode::Left => app.adjust_slider(section, controls, -1),
        KeyCode::Right => app.adjust_slider(section, controls, 1),

        KeyCode::Char('[') => cycle_selector(view_state, app, false),
        KeyCode::Char(']') => cycle_selector(view_state, app, true),

        KeyCode::Char(' ') if section == Section::GoalsByCompetition => {
            if let Some(selected) = controls
                .competition_selected
                .get_mut(controls.competition_cursor)
            {
                *selected = !*selected;
            }
        }
        KeyCode::Char('a') if section == Section::GoalsByCompetition => {
            // Select all unless everything is already selected.
            let all = controls.competition_selected.iter().all(|s| *s);
            controls.competition_selected.fill(!all);
        }

        KeyCode::Char('-') if section == Section::AssistProviders => {
            app.adjust_assist_rows(controls, -1)
        }
        KeyCode::Char('=') | KeyCode::Char('+') if section == Section::AssistProviders => {
            app.adjust_assist_rows(controls, 1)
        }

        KeyCode::Char('o') => controls.order = controls.order.toggle(),
        KeyCode::Char('v') => controls.show_values = !controls.show_values,
        KeyCode::Char('c') => {
            let len = app.config().display.palette.len().max(1);
            controls.color_index = (controls.color_index + 1) % len;
        }
        KeyCode::Char('k') => controls.chart_kind = controls.chart_kind.toggle(),

        KeyCode::Char('q') => view_state.confirm_quit = true,

        _ => {}
    }
    None
}

/// Handle key events while the quit confirmation dialog is showing.
///
/// - `y` or `q` confirms quit
/// - `n` or `Esc` cancels
/// - All other keys are blocked
fn handle_confirm_quit(key_event: KeyEvent, view_state: &mut ViewState) -> Option<UserCommand> {
    match key_event.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Char('q') | KeyCode::Char('Q') => {
            Some(UserCommand::Quit)
        }
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => {
            view_state.confirm_quit = false;
            None
        }
        _ => None,
    }
}

/// Step the active section's selector forward or backward.
fn cycle_selector(view_state: &mut ViewState, app: &AppState, forward: bool) {
    let controls = &mut view_state.controls;
    match view_state.section {
        Section::GoalsBySeason => {
            let len = app.catalog().seasons.len();
            controls.season_index = step_wrapping(controls.season_index, len, forward);
        }
        Section::GoalsByCompetition => {
            let len = app.catalog().competitions.len();
            controls.competition_cursor = step_wrapping(controls.competition_cursor, len, forward);
        }
        Section::MatchQuarters => {
            controls.quarter = if forward {
                controls.quarter.next()
            } else {
                controls.quarter.prev()
            };
        }
        Section::GoalTypes => {
            controls.goal_type_view = if forward {
                controls.goal_type_view.next()
            } else {
                controls.goal_type_view.prev()
            };
        }
        _ => {}
    }
}

fn step_wrapping(index: usize, len: usize, forward: bool) -> usize {
    if len == 0 {
        return 0;
    }
    if forward {
        (index + 1) % len
    } else {
        (index + len - 1) % len
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
