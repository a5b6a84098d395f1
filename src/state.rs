use crate::types::{DemoEndpoint, DemoPayloads, LoadingState};
use serde_json::Value;

/// Loaded data: the three result slots and the load status
#[derive(Debug, Clone)]
pub struct DataState {
    pub loading_state: LoadingState,
    pub one: Option<Value>,
    pub two: Option<Value>,
    pub three: Option<Value>,
}

impl Default for DataState {
    fn default() -> Self {
        Self {
            loading_state: LoadingState::Idle,
            one: None,
            two: None,
            three: None,
        }
    }
}

/// Presentation-only state
#[derive(Debug, Clone)]
pub struct UiState {
    /// Block that receives scroll and yank keys
    pub focused: DemoEndpoint,

    /// Vertical scroll offset per block, indexed by `DemoEndpoint::index`
    pub scroll: [usize; 3],

    /// Set briefly after a successful yank
    pub yank_flash: bool,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            focused: DemoEndpoint::One,
            scroll: [0; 3],
            yank_flash: false,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub data: DataState,
    pub ui: UiState,
}

impl AppState {
    /// Value stored for an endpoint, if the load succeeded
    pub fn slot(&self, endpoint: DemoEndpoint) -> Option<&Value> {
        match endpoint {
            DemoEndpoint::One => self.data.one.as_ref(),
            DemoEndpoint::Two => self.data.two.as_ref(),
            DemoEndpoint::Three => self.data.three.as_ref(),
        }
    }

    /// Error text shown under the heading; empty unless the load failed
    pub fn error_message(&self) -> &str {
        match &self.data.loading_state {
            LoadingState::Error(message) => message,
            _ => "",
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.data.loading_state, LoadingState::Fetching)
    }

    /// Move from Idle to Fetching. Returns false if a load already happened.
    pub(crate) fn begin_load(&mut self) -> bool {
        if self.data.loading_state != LoadingState::Idle {
            return false;
        }
        self.data.loading_state = LoadingState::Fetching;
        true
    }

    /// Store all three bodies at once. Ignored unless a load is in flight.
    pub(crate) fn complete_load(&mut self, payloads: DemoPayloads) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.data.one = Some(payloads.one);
        self.data.two = Some(payloads.two);
        self.data.three = Some(payloads.three);
        self.data.loading_state = LoadingState::Complete;
        true
    }

    /// Record a load failure. Slots stay unset. Ignored unless a load is in flight.
    pub(crate) fn fail_load(&mut self, message: String) -> bool {
        if !self.is_loading() {
            return false;
        }
        self.data.loading_state = LoadingState::Error(message);
        true
    }
}
