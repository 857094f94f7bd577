// goalboard entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Load the goal records CSV once
// 4. Run the TUI until the user quits

use std::path::Path;
use std::sync::Arc;

use goalboard_core::config;
use goalboard_core::dataset::Dataset;
use goalboard_tui::app::AppState;
use goalboard_tui::tui;

use anyhow::Context;
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing()?;
    info!("goalboard starting up");

    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: data={}, important matches=\"{}\" / \"{}\"",
        config.data.path, config.important_matches.competition, config.important_matches.opponent
    );

    let dataset = Dataset::load(Path::new(&config.data.path), &config.data.date_formats)
        .with_context(|| format!("failed to load goal records from {}", config.data.path))?;

    let app = AppState::new(Arc::new(dataset), config);

    if let Err(e) = tui::run(app).await {
        error!("TUI error: {}", e);
        return Err(e);
    }

    info!("goalboard shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("goalboard.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("goalboard_core=info,goalboard_tui=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
