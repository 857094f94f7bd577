// TUI dashboard: layout, input handling, and widget rendering.
//
// The TUI owns a `ViewState` holding the active section, the session's
// `Controls` and the current panel. Key presses mutate `ViewState`; when the
// section or any control changed, the panel is recomputed once from the
// shared dataset. Rendering happens on a ~30 fps tick.

pub mod input;
pub mod layout;
pub mod widgets;

use std::time::Duration;

use crossterm::event::{Event, EventStream, KeyEvent};
use futures_util::StreamExt;
use ratatui::Frame;
use tracing::{debug, info, warn};

use crate::app::{AppState, Controls, PanelContent, Section};

use layout::build_layout;

/// Commands produced by the input handler that the loop acts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserCommand {
    Quit,
}

// ---------------------------------------------------------------------------
// ViewState
// ---------------------------------------------------------------------------

/// Per-session state rendered by the widgets.
#[derive(Debug, Clone)]
pub struct ViewState {
    pub section: Section,
    pub controls: Controls,
    /// Output of the last recomputation for `section` and `controls`.
    pub panel: PanelContent,
    pub confirm_quit: bool,
    /// Number of goals in the dataset, for the status bar.
    pub total_goals: usize,
    /// Dataset file name, for the status bar.
    pub source: String,
}

impl ViewState {
    pub fn new(app: &AppState) -> Self {
        let section = Section::Home;
        let controls = app.initial_controls();
        let panel = app.compute_panel(section, &controls);
        let source = app
            .dataset()
            .source()
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();
        ViewState {
            section,
            controls,
            panel,
            confirm_quit: false,
            total_goals: app.dataset().len(),
            source,
        }
    }
}

/// Handle one key press and recompute the panel if the selection changed.
pub fn apply_key(
    key_event: KeyEvent,
    view_state: &mut ViewState,
    app: &AppState,
) -> Option<UserCommand> {
    let before = (view_state.section, view_state.controls.clone());
    let command = input::handle_key(key_event, view_state, app);

    if before.0 != view_state.section || before.1 != view_state.controls {
        debug!(section = ?view_state.section, "selection changed");
        view_state.panel = app.compute_panel(view_state.section, &view_state.controls);
    }
    command
}

// ---------------------------------------------------------------------------
// Render frame
// ---------------------------------------------------------------------------

/// Render the complete dashboard frame.
pub fn render_frame(frame: &mut Frame, state: &ViewState, app: &AppState) {
    let layout = build_layout(frame.area());

    widgets::status_bar::render(frame, layout.status_bar, state, app);
    widgets::sidebar::render(frame, layout.sidebar, state);
    widgets::panel::render(frame, layout.main_panel, &state.panel);
    widgets::help_bar::render(frame, layout.help_bar, state);

    if state.confirm_quit {
        widgets::quit_confirm::render(frame, frame.area());
    }
}

// ---------------------------------------------------------------------------
// Main TUI loop
// ---------------------------------------------------------------------------

/// Run the TUI event loop.
///
/// 1. Initializes the terminal (raw mode, alternate screen).
/// 2. Installs a panic hook to restore the terminal on crash.
/// 3. Runs an async select loop over keyboard input and render ticks.
/// 4. Restores the terminal on exit.
pub async fn run(app: AppState) -> anyhow::Result<()> {
    let mut terminal = ratatui::init();

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        ratatui::restore();
        original_hook(panic_info);
    }));

    let mut view_state = ViewState::new(&app);
    info!(goals = view_state.total_goals, "dashboard session started");

    let mut event_stream = EventStream::new();

    let mut render_tick = tokio::time::interval(Duration::from_millis(33));
    render_tick.set_missed_tick_behavior(tokio::time::MissedTickBehavior::Skip);

    loop {
        tokio::select! {
            maybe_event = event_stream.next() => {
                match maybe_event {
                    Some(Ok(Event::Key(key_event))) => {
                        if let Some(UserCommand::Quit) = apply_key(key_event, &mut view_state, &app) {
                            break;
                        }
                    }
                    Some(Ok(_)) => {
                        // Mouse and resize events: the next tick redraws.
                    }
                    Some(Err(e)) => {
                        warn!("terminal input error: {e}");
                        break;
                    }
                    None => break,
                }
            }

            _ = render_tick.tick() => {
                terminal.draw(|frame| render_frame(frame, &view_state, &app))?;
            }
        }
    }

    ratatui::restore();
    info!("dashboard session ended");

    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
