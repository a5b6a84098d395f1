//! Helper functions for event handling

use crate::actions::{apply_action, AppAction};
use crate::state::AppState;
use std::sync::{Arc, RwLock};

/// Apply a single action to state
pub fn apply(state: &Arc<RwLock<AppState>>, action: AppAction) {
    match state.write() {
        Ok(mut s) => apply_action(action, &mut s),
        Err(_) => tracing::error!(?action, "state lock poisoned, action dropped"),
    }
}
