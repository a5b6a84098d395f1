use crate::state::AppState;
use crate::types::{DemoEndpoint, DemoPayloads};
use crate::ui::draw::format_slot;

/// Represents all possible state-changing actions in the application
/// Input handling and the background loader both go through `apply_action`,
/// so every mutation of `AppState` is visible in one place.
#[derive(Debug, Clone, PartialEq)]
pub enum AppAction {
    // Focus actions
    FocusNext,
    FocusPrevious,
    Focus(DemoEndpoint),

    // Scrolling actions (focused block)
    ScrollUp,
    ScrollDown,
    ScrollTop,

    // Clipboard feedback
    SetYankFlash(bool),

    // Load outcome
    LoadSucceeded(DemoPayloads),
    LoadFailed(String),
}

/// Apply an action to the application state
pub fn apply_action(action: AppAction, state: &mut AppState) {
    match action {
        AppAction::FocusNext => {
            state.ui.focused = state.ui.focused.next();
        }
        AppAction::FocusPrevious => {
            state.ui.focused = state.ui.focused.previous();
        }
        AppAction::Focus(endpoint) => {
            state.ui.focused = endpoint;
        }
        AppAction::ScrollUp => {
            let idx = state.ui.focused.index();
            state.ui.scroll[idx] = state.ui.scroll[idx].saturating_sub(1);
        }
        AppAction::ScrollDown => {
            let endpoint = state.ui.focused;
            let max = max_scroll(state, endpoint);
            let offset = &mut state.ui.scroll[endpoint.index()];
            if *offset < max {
                *offset += 1;
            }
        }
        AppAction::ScrollTop => {
            state.ui.scroll[state.ui.focused.index()] = 0;
        }
        AppAction::SetYankFlash(on) => {
            state.ui.yank_flash = on;
        }
        AppAction::LoadSucceeded(payloads) => {
            if !state.complete_load(payloads) {
                tracing::warn!("load result arrived outside of a fetch, dropped");
            }
        }
        AppAction::LoadFailed(message) => {
            if !state.fail_load(message) {
                tracing::warn!("load failure arrived outside of a fetch, dropped");
            }
        }
    }
}

/// Last line a block can be scrolled to
fn max_scroll(state: &AppState, endpoint: DemoEndpoint) -> usize {
    format_slot(state.slot(endpoint))
        .lines()
        .count()
        .saturating_sub(1)
}
