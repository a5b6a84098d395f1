//! Event handling for kitchen-demo-tui
//!
//! Key presses are mapped to a `KeyCommand`. Commands that only change state
//! carry an `AppAction`, which is applied to `AppState` through
//! `apply_action` in actions.rs; quitting and yanking are handled here.
//!
//! # Lock Management
//!
//! The state lock is taken once per applied action and never held while
//! waiting for input.

mod helpers;
mod yank;

use crate::actions::AppAction;
use crate::state::AppState;
use crate::types::DemoEndpoint;
use color_eyre::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// What a key press asks the application to do
#[derive(Debug, Clone, PartialEq)]
pub enum KeyCommand {
    Quit,
    Yank,
    Apply(AppAction),
}

/// Event handler for managing user input and state updates
#[derive(Debug, Default)]
pub struct EventHandler {
    pub should_quit: bool,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wait briefly for one input event and act on it
    pub fn handle_events(&mut self, state: Arc<RwLock<AppState>>) -> Result<()> {
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                // Ignore release/repeat events reported by some terminals
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key, state);
                }
            }
        }
        Ok(())
    }

    pub fn handle_key(&mut self, key: KeyEvent, state: Arc<RwLock<AppState>>) {
        let Some(command) = map_key(key) else {
            return;
        };

        tracing::trace!(?command, "key command");

        match command {
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::Yank => yank::handle_yank_focused_block(state),
            KeyCommand::Apply(action) => helpers::apply(&state, action),
        }
    }
}

/// Translate a key press into a command
pub fn map_key(key: KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return match key.code {
            KeyCode::Char('c') => Some(KeyCommand::Quit),
            _ => None,
        };
    }

    let command = match key.code {
        KeyCode::Char('q') | KeyCode::Esc => KeyCommand::Quit,
        KeyCode::Char('y') => KeyCommand::Yank,

        // Focus
        KeyCode::Tab => KeyCommand::Apply(AppAction::FocusNext),
        KeyCode::BackTab => KeyCommand::Apply(AppAction::FocusPrevious),
        KeyCode::Char('1') => KeyCommand::Apply(AppAction::Focus(DemoEndpoint::One)),
        KeyCode::Char('2') => KeyCommand::Apply(AppAction::Focus(DemoEndpoint::Two)),
        KeyCode::Char('3') => KeyCommand::Apply(AppAction::Focus(DemoEndpoint::Three)),

        // Scrolling
        KeyCode::Char('j') | KeyCode::Down => KeyCommand::Apply(AppAction::ScrollDown),
        KeyCode::Char('k') | KeyCode::Up => KeyCommand::Apply(AppAction::ScrollUp),
        KeyCode::Char('g') | KeyCode::Home => KeyCommand::Apply(AppAction::ScrollTop),

        _ => return None,
    };

    Some(command)
}
