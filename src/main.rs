// pagedeck - swipeable paged terminal deck
//
// A deck of side-by-side pages navigated the way touch UIs page between
// views: drag horizontally and release, or tap a tab. One controller owns
// the (page index, offset) pair for the whole screen; everything else
// renders around it.
//
// Architecture:
// - swipe: the paged-swipe controller, its settle tween, and the tab strip
// - layout/search/calendar: pure helpers the pages demonstrate
// - tui (ratatui): event loop, deck renderer, chrome components, pages
// - config: TOML file + env overrides for theme, motion feel, features

mod calendar;
mod cli;
mod config;
mod layout;
mod logging;
mod search;
mod swipe;
mod theme;
mod tui;

use anyhow::Result;
use config::{Config, LogRotation};
use logging::{BufferLayer, LogBuffer};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // Handle CLI commands first (config --show, --reset, --edit, --path)
    // If a command was handled, exit early
    if cli::handle_cli() {
        return Ok(());
    }

    // Ensure config template exists (helps users discover options)
    Config::ensure_config_exists();

    let config = Config::from_env();

    // Logs are captured into this buffer and shown on the Journal page;
    // writing them to stdout would garble the alternate screen.
    let log_buffer = LogBuffer::new();

    // Precedence: RUST_LOG env var > config file > default "info"
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("pagedeck={}", config.logging.level).into());

    // Optional file logging: JSON lines through a rotating, non-blocking
    // appender. The guard must outlive the program so buffered logs flush.
    let _file_guard: Option<tracing_appender::non_blocking::WorkerGuard> =
        if config.logging.file_enabled {
            if let Err(e) = std::fs::create_dir_all(&config.logging.file_dir) {
                eprintln!(
                    "Warning: Could not create log directory {:?}: {}",
                    config.logging.file_dir, e
                );
                // Fall back to buffer-only logging
                tracing_subscriber::registry()
                    .with(filter)
                    .with(BufferLayer::new(log_buffer.clone()))
                    .init();
                None
            } else {
                let file_appender = match config.logging.file_rotation {
                    LogRotation::Hourly => tracing_appender::rolling::hourly(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Daily => tracing_appender::rolling::daily(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                    LogRotation::Never => tracing_appender::rolling::never(
                        &config.logging.file_dir,
                        &config.logging.file_prefix,
                    ),
                };

                let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

                tracing_subscriber::registry()
                    .with(filter)
                    .with(BufferLayer::new(log_buffer.clone()))
                    .with(
                        tracing_subscriber::fmt::layer()
                            .json()
                            .with_writer(non_blocking)
                            .with_ansi(false),
                    )
                    .init();

                Some(guard)
            }
        } else {
            tracing_subscriber::registry()
                .with(filter)
                .with(BufferLayer::new(log_buffer.clone()))
                .init();
            None
        };

    tracing::info!(
        version = config::VERSION,
        theme = %config.theme,
        pages = 1 + config.features.gallery as usize
            + config.features.calendar as usize
            + config.features.journal as usize,
        "pagedeck starting"
    );

    // Run the TUI in the main task; blocks until the user quits
    tui::run_tui(config, log_buffer).await?;

    tracing::info!("shutdown complete");
    Ok(())
}
