//! Reusable UI components
//!
//! This module contains the page chrome around the result blocks:
//! - Header (heading, base address, load status)
//! - Error line
//! - Footer (command help)

use super::styling;
use crate::types::LoadingState;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

/// Heading shown at the top of the page whatever the load outcome
pub const HEADING: &str = "Kitchen API Demo (3 endpoints)";

/// Render the application header with the heading and load status
pub fn render_header(
    frame: &mut Frame,
    area: Rect,
    base_url: &str,
    loading_state: &LoadingState,
    spinner_index: usize,
) {
    let status_text = match loading_state {
        LoadingState::Idle => "Idle".to_string(),
        LoadingState::Fetching => {
            let spinner = styling::SPINNER_FRAMES[spinner_index % styling::SPINNER_FRAMES.len()];
            format!("{spinner} Fetching...")
        }
        LoadingState::Complete => "3 endpoints loaded".to_string(),
        LoadingState::Error(_) => "Error".to_string(),
    };

    let heading = Line::from(vec![Span::styled(
        HEADING,
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )]);

    let header = Paragraph::new(heading).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {base_url} [{status_text}] ")),
    );

    frame.render_widget(header, area);
}

/// Render the load failure message in red
pub fn render_error_line(frame: &mut Frame, area: Rect, error: &str) {
    let error_widget = Paragraph::new(format!("❌ {error}"))
        .style(styling::error_style())
        .wrap(Wrap { trim: true })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styling::error_style())
                .title("Error"),
        );

    frame.render_widget(error_widget, area);
}

/// Render the footer with command help
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let footer_text = "Tab/S-Tab/1-3:Focus j/k/↑/↓:Scroll g:Top | y:Copy q:Quit";

    let footer = Paragraph::new(footer_text)
        .style(Style::default().fg(Color::Yellow))
        .block(Block::default().borders(Borders::ALL).title("Commands"));

    frame.render_widget(footer, area);
}
