//! Dashsea binary entrypoint kept minimal. The full runtime lives in `app`.

mod api;
mod app;
mod args;
mod events;
mod state;
mod theme;
mod ui;
mod util;

use std::fmt;
use std::sync::OnceLock;

use clap::Parser;

struct DashseaTimer;

impl tracing_subscriber::fmt::time::FormatTime for DashseaTimer {
    fn format_time(&self, w: &mut tracing_subscriber::fmt::format::Writer<'_>) -> fmt::Result {
        let now = chrono::Local::now();
        w.write_str(&now.format("%Y-%m-%d-T%H:%M:%S").to_string())
    }
}

static LOG_GUARD: OnceLock<tracing_appender::non_blocking::WorkerGuard> = OnceLock::new();

/// Initialize the tracing logger writing to `~/.config/dashsea/logs/dashsea.log`.
fn init_logging(default_level: &str) {
    let mut log_path = crate::theme::logs_dir();
    log_path.push("dashsea.log");
    match std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    {
        Ok(file) => {
            let (non_blocking, guard) = tracing_appender::non_blocking(file);
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(false)
                .with_writer(non_blocking)
                .with_timer(DashseaTimer)
                .init();
            let _ = LOG_GUARD.set(guard);
            tracing::info!(path = %log_path.display(), "logging initialized");
        }
        Err(e) => {
            // Fallback: init stderr logger to avoid blocking startup
            let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
            tracing_subscriber::fmt()
                .with_env_filter(env_filter)
                .with_target(false)
                .with_ansi(true)
                .with_timer(DashseaTimer)
                .init();
            tracing::warn!(error = %e, "failed to open log file; using stderr");
        }
    }
}

#[tokio::main]
async fn main() {
    let cli_args = args::Args::parse();
    init_logging(&args::determine_log_level(&cli_args));

    tracing::info!("Dashsea starting");
    let start_view = args::process_args(&cli_args).await;
    if let Err(err) = app::run(start_view).await {
        tracing::error!(error = ?err, "Application error");
    }
    tracing::info!("Dashsea exited");
}
