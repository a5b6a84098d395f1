//! Whole-screen layout: header, optional error line, result blocks, footer

use super::components::{render_error_line, render_footer, render_header};
use super::panels::render_result_panels;
use crate::state::AppState;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
};

/// Draw one frame of the demo page
pub fn render_page(frame: &mut Frame, state: &AppState, base_url: &str, spinner_index: usize) {
    let error = state.error_message();
    let error_height = if error.is_empty() { 0 } else { 4 };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),            // Header
            Constraint::Length(error_height), // Error line
            Constraint::Min(0),               // Result blocks
            Constraint::Length(3),            // Footer
        ])
        .split(frame.area());

    render_header(
        frame,
        chunks[0],
        base_url,
        &state.data.loading_state,
        spinner_index,
    );

    if !error.is_empty() {
        render_error_line(frame, chunks[1], error);
    }

    render_result_panels(frame, chunks[2], state, spinner_index);
    render_footer(frame, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DemoPayloads;
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::style::Color;
    use ratatui::Terminal;
    use serde_json::json;

    const BASE: &str = "http://127.0.0.1:5000";

    fn render(state: &AppState) -> Buffer {
        let backend = TestBackend::new(100, 40);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_page(frame, state, BASE, 0))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn rows(buffer: &Buffer) -> Vec<String> {
        let area = buffer.area;
        (0..area.height)
            .map(|y| (0..area.width).map(|x| buffer[(x, y)].symbol()).collect())
            .collect()
    }

    fn row_of(rows: &[String], needle: &str) -> Option<usize> {
        rows.iter().position(|row| row.contains(needle))
    }

    fn loaded_state() -> AppState {
        let mut state = AppState::default();
        state.begin_load();
        state.complete_load(DemoPayloads {
            one: json!({"x": 1}),
            two: json!([1, 2, 3]),
            three: json!("ok"),
        });
        state
    }

    fn failed_state(message: &str) -> AppState {
        let mut state = AppState::default();
        state.begin_load();
        state.fail_load(message.to_string());
        state
    }

    #[test]
    fn test_heading_always_present() {
        let mut fetching = AppState::default();
        fetching.begin_load();

        for state in [
            AppState::default(),
            fetching,
            loaded_state(),
            failed_state("connection refused"),
        ] {
            let rows = rows(&render(&state));
            assert!(
                row_of(&rows, "Kitchen API Demo (3 endpoints)").is_some(),
                "heading missing for {:?}",
                state.data.loading_state
            );
        }
    }

    #[test]
    fn test_results_under_their_headings() {
        let rows = rows(&render(&loaded_state()));

        let one = row_of(&rows, "/demo/one").unwrap();
        let two = row_of(&rows, "/demo/two").unwrap();
        let three = row_of(&rows, "/demo/three").unwrap();
        assert!(one < two && two < three);

        let x = row_of(&rows, "\"x\": 1").unwrap();
        assert!(one < x && x < two);

        let first = row_of(&rows, "  1,").unwrap();
        assert!(two < first && first < three);
        assert!(rows[first + 1].contains("  2,"));
        assert!(rows[first + 2].contains("  3 "));

        let ok = row_of(&rows, "\"ok\"").unwrap();
        assert!(three < ok);
    }

    #[test]
    fn test_no_error_line_on_success() {
        let rows = rows(&render(&loaded_state()));
        assert!(row_of(&rows, "Error").is_none());
    }

    #[test]
    fn test_failure_shows_error_and_no_data() {
        let message = "error sending request for url (http://127.0.0.1:5000/demo/two)";
        let buffer = render(&failed_state(message));
        let rows = rows(&buffer);

        let error_row = row_of(&rows, "error sending request").unwrap();
        let one = row_of(&rows, "/demo/one").unwrap();
        assert!(error_row < one);

        // Error text is drawn in red
        let x = rows[error_row].find("error sending").unwrap();
        let column = rows[error_row][..x].chars().count() as u16;
        assert_eq!(buffer[(column, error_row as u16)].fg, Color::Red);

        // Unset slots render as null, never as data
        assert!(row_of(&rows, "\"x\"").is_none());
        assert!(row_of(&rows, "\"ok\"").is_none());
        assert_eq!(rows.iter().filter(|r| r.contains("null")).count(), 3);
    }

    #[test]
    fn test_loading_blocks_show_spinner() {
        let mut state = AppState::default();
        state.begin_load();
        let rows = rows(&render(&state));

        assert_eq!(rows.iter().filter(|r| r.contains("Loading...")).count(), 3);
        assert!(row_of(&rows, "Fetching...").is_some());
    }

    #[test]
    fn test_scroll_offsets_block_content() {
        let mut state = loaded_state();
        state.ui.scroll[0] = 1;
        let rows = rows(&render(&state));

        let one = row_of(&rows, "/demo/one").unwrap();
        assert!(rows[one + 1].contains("\"x\": 1"));
    }

    #[test]
    fn test_copied_flash_in_title() {
        let mut state = loaded_state();
        state.ui.yank_flash = true;
        let rows = rows(&render(&state));

        assert!(row_of(&rows, "/demo/one (copied)").is_some());
        assert!(row_of(&rows, "/demo/two (copied)").is_none());
    }
}
