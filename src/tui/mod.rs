//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the UI,
//! and translates keyboard events into core::Action values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Focus
//!
//! Three panes take keys in turn (Tab / Shift+Tab): the input line, the todo
//! list and the owner list. Typing a character while a list has focus jumps
//! back to the input line, so the user can always just start typing.
//!
//! ## Redraw Strategy
//!
//! Frames are only drawn after an event or a backend outcome. While requests
//! are in flight the loop polls faster so outcomes show up promptly.
//!
//! A `SteadyBlock` cursor style is used instead of a blinking cursor because
//! ratatui's `set_cursor_position` resets the terminal's blink timer on every
//! `draw()` call.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};
use std::time::Duration;

use crossterm::cursor::{Hide, SetCursorStyle, Show};
use crossterm::event::{DisableBracketedPaste, EnableBracketedPaste};
use crossterm::execute;
use ratatui::DefaultTerminal;

use crate::api::{HttpBackend, TodoBackend};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::core::sync;
use crate::tui::component::EventHandler;
use crate::tui::components::{InputBox, InputEvent, SelectionState};
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// Which pane receives keyboard input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Input,
    Todos,
    Owners,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Input => Focus::Todos,
            Focus::Todos => Focus::Owners,
            Focus::Owners => Focus::Input,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Input => Focus::Owners,
            Focus::Todos => Focus::Input,
            Focus::Owners => Focus::Todos,
        }
    }
}

/// TUI-specific presentation state (not part of core business logic)
pub struct TuiState {
    pub input_box: InputBox,
    pub todo_selection: SelectionState,
    pub owner_selection: SelectionState,
    pub focus: Focus,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            input_box: InputBox::new(),
            todo_selection: SelectionState::new(),
            owner_selection: SelectionState::new(),
            focus: Focus::Input, // User expects to type immediately
        }
    }

    /// Push props derived from `App` into the components.
    pub fn sync(&mut self, app: &App) {
        self.input_box.editing = app.edit.is_editing();
        self.input_box.focused = self.focus == Focus::Input && app.notification().is_none();
        self.input_box.sync(&app.edit.input_text);
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(
            stdout(),
            EnableBracketedPaste,
            Show,
            SetCursorStyle::SteadyBlock
        )?;
        info!("Terminal modes enabled (bracketed paste, steady block cursor)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableBracketedPaste, Hide);
    }
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let backend: Arc<dyn TodoBackend> = Arc::new(HttpBackend::new(&config.base_url));
    let mut app = App::from_config(&config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let result = event_loop(&mut terminal, &mut app, &mut tui, &backend);
    ratatui::restore();
    result
}

fn event_loop(
    terminal: &mut DefaultTerminal,
    app: &mut App,
    tui: &mut TuiState,
    backend: &Arc<dyn TodoBackend>,
) -> std::io::Result<()> {
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for outcomes from background requests
    let (tx, rx) = mpsc::channel();

    let effect = update(app, Action::Refresh);
    spawn_effect(effect, backend, &tx);
    tui.sync(app);

    let mut needs_redraw = true; // Force first frame

    loop {
        if needs_redraw {
            terminal.draw(|f| ui::draw_ui(f, app, tui))?;
            needs_redraw = false;
        }

        let timeout = if app.is_loading() {
            Duration::from_millis(100)
        } else {
            Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);
        if first_event.is_some() {
            needs_redraw = true;
        }

        // Process first event + drain all pending events before next draw
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            let Some(action) = route_event(app, tui, event) else {
                continue;
            };
            let effect = update(app, action);
            if effect == Effect::Quit {
                info!("Quit requested");
                return Ok(());
            }
            spawn_effect(effect, backend, &tx);
            tui.sync(app);
        }

        // Outcomes of background requests
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            let effect = update(app, action);
            spawn_effect(effect, backend, &tx);
            tui.sync(app);
        }
    }
}

/// Runs a request effect in the background; its outcome comes back over `tx`.
fn spawn_effect(effect: Effect, backend: &Arc<dyn TodoBackend>, tx: &mpsc::Sender<Action>) {
    if !effect.is_request() {
        return;
    }
    debug!("Spawning effect: {:?}", effect);
    let backend = Arc::clone(backend);
    let tx = tx.clone();
    tokio::spawn(async move {
        if let Some(action) = sync::execute(effect, backend.as_ref()).await
            && tx.send(action).is_err()
        {
            warn!("Failed to send request outcome: receiver dropped");
        }
    });
}

fn selected_todo_id(app: &App, tui: &TuiState) -> Option<String> {
    let index = tui.todo_selection.selected()?;
    app.todos.get(index).map(|t| t.id.clone())
}

fn selected_owner_id(app: &App, tui: &TuiState) -> Option<String> {
    let index = tui.owner_selection.selected()?;
    app.owners.get(index).map(|o| o.id.clone())
}

/// Forward a key to the input line, taking focus there first.
fn type_into_input(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    tui.focus = Focus::Input;
    tui.input_box.focused = true;
    input_action(tui, event)
}

fn input_action(tui: &mut TuiState, event: &TuiEvent) -> Option<Action> {
    match tui.input_box.handle_event(event)? {
        InputEvent::Changed(text) => Some(Action::InputChanged(text)),
        InputEvent::Submit => Some(Action::Submit),
    }
}

/// Translate one terminal event into at most one core action.
///
/// Focus and selection changes are applied to `tui` directly; they never
/// reach the core.
fn route_event(app: &App, tui: &mut TuiState, event: TuiEvent) -> Option<Action> {
    if event == TuiEvent::ForceQuit {
        return Some(Action::Quit);
    }
    if event == TuiEvent::Resize {
        return None;
    }

    // The error overlay blocks everything until dismissed.
    if app.notification().is_some() {
        return Some(Action::DismissNotification);
    }

    match event {
        TuiEvent::FocusNext => {
            tui.focus = tui.focus.next();
            return None;
        }
        TuiEvent::FocusPrev => {
            tui.focus = tui.focus.prev();
            return None;
        }
        _ => {}
    }

    let editing = app.edit.is_editing();
    match tui.focus {
        Focus::Input => match event {
            TuiEvent::Escape if editing => Some(Action::CancelEdit),
            TuiEvent::Escape => {
                tui.focus = Focus::Todos;
                None
            }
            _ => input_action(tui, &event),
        },
        Focus::Todos => {
            let len = app.todos.len();
            match event {
                TuiEvent::Up | TuiEvent::InputChar('k') => {
                    tui.todo_selection.select_prev(len);
                    None
                }
                TuiEvent::Down | TuiEvent::InputChar('j') => {
                    tui.todo_selection.select_next(len);
                    None
                }
                TuiEvent::Submit | TuiEvent::InputChar('e') => {
                    let id = selected_todo_id(app, tui)?;
                    tui.focus = Focus::Input;
                    Some(Action::BeginEdit(id))
                }
                TuiEvent::Delete | TuiEvent::InputChar('d') => {
                    selected_todo_id(app, tui).map(Action::DeleteTodo)
                }
                TuiEvent::Escape | TuiEvent::InputChar('c') if editing => Some(Action::CancelEdit),
                TuiEvent::InputChar('r') => Some(Action::Refresh),
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => type_into_input(tui, &event),
                _ => None,
            }
        }
        Focus::Owners => {
            let len = app.owners.len();
            match event {
                TuiEvent::Up | TuiEvent::InputChar('k') => {
                    tui.owner_selection.select_prev(len);
                    None
                }
                TuiEvent::Down | TuiEvent::InputChar('j') => {
                    tui.owner_selection.select_next(len);
                    None
                }
                TuiEvent::Delete | TuiEvent::InputChar('d') => {
                    selected_owner_id(app, tui).map(Action::DeleteOwner)
                }
                TuiEvent::InputChar('r') => Some(Action::Refresh),
                TuiEvent::InputChar('q') => Some(Action::Quit),
                TuiEvent::Escape => {
                    tui.focus = Focus::Input;
                    None
                }
                TuiEvent::InputChar(_) | TuiEvent::Paste(_) => type_into_input(tui, &event),
                _ => None,
            }
        }
    }
}
