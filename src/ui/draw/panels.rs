//! Result block rendering
//!
//! One bordered block per demo endpoint, stacked vertically in endpoint order.

use super::{json, styling};
use crate::state::AppState;
use crate::types::DemoEndpoint;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::Span,
    widgets::{Block, Borders, Paragraph},
};
use serde_json::Value;

/// Render the three result blocks
pub fn render_result_panels(frame: &mut Frame, area: Rect, state: &AppState, spinner_index: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(area);

    for endpoint in DemoEndpoint::ALL {
        render_result_block(frame, chunks[endpoint.index()], state, endpoint, spinner_index);
    }
}

/// Pretty-print a slot with two-space indentation, laid out exactly like
/// `JSON.stringify(value, null, 2)`; an unset slot reads `null`
pub fn format_slot(value: Option<&Value>) -> String {
    match value {
        Some(value) => json::to_pretty_string(value),
        None => "null".to_string(),
    }
}

// ============================================================================
// Private Helper Functions
// ============================================================================

fn render_result_block(
    frame: &mut Frame,
    area: Rect,
    state: &AppState,
    endpoint: DemoEndpoint,
    spinner_index: usize,
) {
    let focused = state.ui.focused == endpoint;

    let border_color = if focused {
        styling::focused_border()
    } else {
        styling::unfocused_border()
    };

    let flash = focused && state.ui.yank_flash;
    let title = if flash {
        format!("{} (copied)", endpoint.path())
    } else {
        endpoint.path().to_string()
    };

    let block = Block::default()
        .title(Span::styled(title, styling::block_title_style(focused, flash)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));

    if state.is_loading() {
        let spinner = styling::SPINNER_FRAMES[spinner_index % styling::SPINNER_FRAMES.len()];
        let loading = Paragraph::new(format!("{spinner} Loading..."))
            .style(Style::default().fg(Color::Yellow))
            .block(block);
        frame.render_widget(loading, area);
        return;
    }

    let slot = state.slot(endpoint);
    let text_style = if slot.is_some() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let scroll = state.ui.scroll[endpoint.index()];
    let content = Paragraph::new(format_slot(slot))
        .style(text_style)
        .scroll((u16::try_from(scroll).unwrap_or(u16::MAX), 0))
        .block(block);

    frame.render_widget(content, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_format_slot_unset() {
        assert_eq!(format_slot(None), "null");
    }

    #[test]
    fn test_format_slot_object() {
        assert_eq!(format_slot(Some(&json!({"x": 1}))), "{\n  \"x\": 1\n}");
    }

    #[test]
    fn test_format_slot_array() {
        assert_eq!(format_slot(Some(&json!([1, 2, 3]))), "[\n  1,\n  2,\n  3\n]");
    }

    #[test]
    fn test_format_slot_scalar() {
        assert_eq!(format_slot(Some(&json!("ok"))), "\"ok\"");
        assert_eq!(format_slot(Some(&json!(null))), "null");
    }

    #[test]
    fn test_format_slot_float_numbers() {
        let value: Value = serde_json::from_str(r#"{"a":1.0,"b":-0.0,"c":1e21}"#).unwrap();
        assert_eq!(
            format_slot(Some(&value)),
            "{\n  \"a\": 1,\n  \"b\": 0,\n  \"c\": 1e+21\n}"
        );
    }

    #[test]
    fn test_format_slot_index_keys_first() {
        let value: Value = serde_json::from_str(r#"{"b":1,"2":2,"1":3}"#).unwrap();
        assert_eq!(
            format_slot(Some(&value)),
            "{\n  \"1\": 3,\n  \"2\": 2,\n  \"b\": 1\n}"
        );
    }
}
