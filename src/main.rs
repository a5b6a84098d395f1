mod actions;
mod app;
mod config;
mod demo;
mod logging;
mod state;
mod types;
mod ui;

use app::App;
use color_eyre::Result;
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _logging = logging::init();

    let config = Config::load()?;

    let terminal = ratatui::init();
    let app_result = App::new(&config).run(terminal).await;
    ratatui::restore();

    if let Err(e) = &app_result {
        tracing::error!(error = %e, "ui loop failed");
    }
    app_result
}
