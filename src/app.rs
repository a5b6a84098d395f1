use crate::config::Config;
use crate::demo;
use crate::state::AppState;
use crate::ui;
use crate::ui::draw::render_page;
use color_eyre::Result;
use ratatui::{DefaultTerminal, Frame};
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};

const SPINNER_TICK: Duration = Duration::from_millis(100);

#[derive(Debug)]
pub struct App {
    state: Arc<RwLock<AppState>>,
    base_url: String,
    client: reqwest::Client,
    spinner_index: usize,
    last_tick: Instant,
    event_handler: ui::EventHandler,
}

impl App {
    pub fn new(config: &Config) -> Self {
        Self {
            state: Arc::new(RwLock::new(AppState::default())),
            base_url: config.base_url(),
            client: reqwest::Client::new(),
            spinner_index: 0,
            last_tick: Instant::now(),
            event_handler: ui::EventHandler::new(),
        }
    }

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> Result<()> {
        // Single load attempt for the lifetime of the app
        demo::load_background(
            Arc::clone(&self.state),
            self.client.clone(),
            self.base_url.clone(),
        );

        // Main UI loop
        while !self.event_handler.should_quit {
            // Update spinner animation
            if self.last_tick.elapsed() > SPINNER_TICK {
                self.spinner_index = (self.spinner_index + 1) % 4;
                self.last_tick = Instant::now();
            }

            terminal.draw(|frame| self.draw(frame))?;
            self.event_handler.handle_events(Arc::clone(&self.state))?;
        }

        tracing::info!("quit requested");
        Ok(())
    }

    fn draw(&self, frame: &mut Frame) {
        let Ok(state) = self.state.read() else {
            return;
        };
        render_page(frame, &state, &self.base_url, self.spinner_index);
    }
}
