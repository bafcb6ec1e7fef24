//! snvl - a terminal admin dashboard.
//!
//! This is the main binary that loads the configuration and launches the TUI.

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use anyhow::Context;
use snvl_config::{Config, persistence};
use snvl_tui::{App, Dataset, terminal};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Sends log records to `path`, appending.
///
/// The terminal belongs to the UI, so nothing is logged unless a log file is
/// configured.
fn init_logging(level: &str, path: &Path) -> anyhow::Result<()> {
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    let filter = EnvFilter::try_new(level).with_context(|| format!("invalid log level {level:?}"))?;

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(Mutex::new(file)),
        )
        .init();
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Config::load().await.context("failed to load configuration")?;

    if let Some(path) = &config.log.file {
        init_logging(&config.log.level, path)?;
    }
    tracing::info!(start_view = %config.start_view, theme = %config.theme, "starting");

    let today = chrono::Local::now().date_naive();
    let mut app = App::with_config(Dataset::mock(), config, today);
    match persistence::save_path() {
        Ok(path) => app = app.with_save_path(path),
        Err(err) => tracing::warn!(error = %err, "theme changes will not be saved"),
    }

    // Install panic hook to restore terminal on panic
    terminal::install_panic_hook();
    let mut terminal = terminal::setup_terminal()?;

    let result = app.run(&mut terminal).await;

    // Always restore terminal, even if app.run() failed
    terminal::restore_terminal(&mut terminal)?;

    result
}
