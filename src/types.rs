use serde_json::Value;

/// One of the three fixed demo resources served by the Kitchen API
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoEndpoint {
    One,
    Two,
    Three,
}

impl DemoEndpoint {
    /// All endpoints in display order
    pub const ALL: [DemoEndpoint; 3] = [DemoEndpoint::One, DemoEndpoint::Two, DemoEndpoint::Three];

    /// Resource path relative to the base address
    pub fn path(self) -> &'static str {
        match self {
            DemoEndpoint::One => "/demo/one",
            DemoEndpoint::Two => "/demo/two",
            DemoEndpoint::Three => "/demo/three",
        }
    }

    /// Position in display order (0-based)
    pub fn index(self) -> usize {
        match self {
            DemoEndpoint::One => 0,
            DemoEndpoint::Two => 1,
            DemoEndpoint::Three => 2,
        }
    }

    /// The block after this one, wrapping around
    pub fn next(self) -> Self {
        match self {
            DemoEndpoint::One => DemoEndpoint::Two,
            DemoEndpoint::Two => DemoEndpoint::Three,
            DemoEndpoint::Three => DemoEndpoint::One,
        }
    }

    /// The block before this one, wrapping around
    pub fn previous(self) -> Self {
        match self {
            DemoEndpoint::One => DemoEndpoint::Three,
            DemoEndpoint::Two => DemoEndpoint::One,
            DemoEndpoint::Three => DemoEndpoint::Two,
        }
    }
}

/// Bodies of all three endpoints from one successful load
#[derive(Debug, Clone, PartialEq)]
pub struct DemoPayloads {
    pub one: Value,
    pub two: Value,
    pub three: Value,
}

#[derive(Debug, Clone, PartialEq)]
pub enum LoadingState {
    Idle,
    Fetching,
    Complete,
    Error(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let paths: Vec<&str> = DemoEndpoint::ALL.iter().map(|e| e.path()).collect();
        assert_eq!(paths, vec!["/demo/one", "/demo/two", "/demo/three"]);
    }

    #[test]
    fn test_endpoint_index_matches_display_order() {
        for (i, endpoint) in DemoEndpoint::ALL.iter().enumerate() {
            assert_eq!(endpoint.index(), i);
        }
    }

    #[test]
    fn test_endpoint_cycle_forward() {
        assert_eq!(DemoEndpoint::One.next(), DemoEndpoint::Two);
        assert_eq!(DemoEndpoint::Two.next(), DemoEndpoint::Three);
        assert_eq!(DemoEndpoint::Three.next(), DemoEndpoint::One);
    }

    #[test]
    fn test_endpoint_cycle_backward() {
        assert_eq!(DemoEndpoint::One.previous(), DemoEndpoint::Three);
        assert_eq!(DemoEndpoint::Three.previous(), DemoEndpoint::Two);
    }
}
