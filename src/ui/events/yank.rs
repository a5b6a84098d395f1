//! Yank (copy) handlers
//!
//! This module handles copying the focused result block to the system
//! clipboard.

use super::helpers::apply;
use crate::actions::AppAction;
use crate::state::AppState;
use crate::ui::draw::format_slot;
use arboard::Clipboard;
use std::sync::{Arc, RwLock};
use std::time::Duration;

/// How long the block title shows "(copied)"
const FLASH_DURATION: Duration = Duration::from_millis(200);

/// Yank the focused block's pretty-printed JSON to the clipboard
pub fn handle_yank_focused_block(state: Arc<RwLock<AppState>>) {
    let text = match state.read() {
        Ok(s) => yank_text(&s),
        Err(_) => return,
    };

    let Some(text) = text else {
        tracing::debug!("focused block is empty, nothing to yank");
        return;
    };

    match Clipboard::new().and_then(|mut clipboard| clipboard.set_text(text.as_str())) {
        Ok(()) => {
            tracing::info!(bytes = text.len(), "yanked focused block");

            apply(&state, AppAction::SetYankFlash(true));

            // Clear flash after delay
            let state_clone = Arc::clone(&state);
            tokio::spawn(async move {
                tokio::time::sleep(FLASH_DURATION).await;
                apply(&state_clone, AppAction::SetYankFlash(false));
            });
        }
        Err(e) => {
            tracing::warn!(error = %e, "failed to copy to clipboard");
        }
    }
}

/// Text copied for the focused block; `None` while its slot is unset
fn yank_text(state: &AppState) -> Option<String> {
    state
        .slot(state.ui.focused)
        .map(|value| format_slot(Some(value)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DemoEndpoint, DemoPayloads};
    use serde_json::json;

    #[test]
    fn test_yank_text_unset_slot() {
        let state = AppState::default();
        assert_eq!(yank_text(&state), None);
    }

    #[test]
    fn test_yank_text_follows_focus() {
        let mut state = AppState::default();
        state.begin_load();
        state.complete_load(DemoPayloads {
            one: json!({"x": 1}),
            two: json!([1, 2, 3]),
            three: json!("ok"),
        });

        assert_eq!(yank_text(&state).unwrap(), "{\n  \"x\": 1\n}");

        state.ui.focused = DemoEndpoint::Three;
        assert_eq!(yank_text(&state).unwrap(), "\"ok\"");
    }

    #[test]
    fn test_yank_text_after_failed_load() {
        let mut state = AppState::default();
        state.begin_load();
        state.fail_load("boom".to_string());

        for endpoint in DemoEndpoint::ALL {
            state.ui.focused = endpoint;
            assert_eq!(yank_text(&state), None);
        }
    }
}
