//! Tracing setup for the shell.
//!
//! Logs go to a daily-rotating file, optionally echoed to the console. The
//! returned guard must stay alive for the duration of the program, otherwise
//! the non-blocking writer shuts down and buffered log lines are lost.

use anyhow::{Context, Result};
use camino::Utf8Path;
use std::fs;
use tracing_appender::rolling;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_PREFIX: &str = "modloader-shell";

/// Initialize the global tracing subscriber.
///
/// # Arguments
/// * `log_dir` - Directory for log files, created if missing
/// * `debug` - Use debug level instead of info (overridable via `RUST_LOG`)
/// * `console` - Also log to the console with ANSI colors
pub fn setup_logging(
    log_dir: &Utf8Path,
    debug: bool,
    console: bool,
) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    if !log_dir.exists() {
        fs::create_dir_all(log_dir)
            .with_context(|| format!("Failed to create log directory: {}", log_dir))?;
    }

    let file_appender = rolling::daily(log_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let default_level = if debug { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log files
        .with_target(true);

    let init_result = if console {
        let console_layer = tracing_subscriber::fmt::layer()
            .with_ansi(true)
            .with_target(false);

        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .with(console_layer)
            .try_init()
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(file_layer)
            .try_init()
    };
    init_result.map_err(|error| anyhow::anyhow!("failed to set global subscriber: {error}"))?;

    // `debug` cannot be used as a shorthand field: the tracing macros import
    // `tracing::field::debug` into the expansion scope, shadowing the local
    // (tokio-rs/tracing#2332). Rebind it so the field keeps its name.
    let debug_enabled = debug;
    tracing::info!(%log_dir, debug = debug_enabled, console, "logging initialized");

    Ok(guard)
}
