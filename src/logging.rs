use anyhow::{Result, anyhow};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use crate::config::AppConfig;

/// Target of per-transfer trace events; silenced unless `enable_tracing`.
pub const TRANSFER_TRACE_TARGET: &str = "TRANSFER";

fn rolling_appender(config: &AppConfig) -> RollingFileAppender {
    match config.rotation.as_str() {
        "hourly" => tracing_appender::rolling::hourly(&config.log_dir, &config.log_file),
        "daily" => tracing_appender::rolling::daily(&config.log_dir, &config.log_file),
        _ => tracing_appender::rolling::never(&config.log_dir, &config.log_file),
    }
}

/// Default filter directive when `RUST_LOG` is unset
pub fn filter_directive(config: &AppConfig) -> String {
    if config.enable_tracing {
        config.log_level.clone()
    } else {
        format!("{},{}=off", config.log_level, TRANSFER_TRACE_TARGET)
    }
}

/// Install the global subscriber: file layer always, stdout layer for text.
///
/// The returned guard must live until shutdown or buffered lines are lost.
pub fn init_logging(config: &AppConfig) -> Result<WorkerGuard> {
    let (non_blocking, guard) = tracing_appender::non_blocking(rolling_appender(config));

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directive(config)));

    let registry = tracing_subscriber::registry().with(filter);

    let installed = if config.use_json {
        let file_layer = fmt::layer()
            .json()
            .with_target(true) // keep target for structured queries
            .with_writer(non_blocking)
            .with_ansi(false);
        registry.with(file_layer).try_init()
    } else {
        let file_layer = fmt::layer()
            .with_target(false)
            .with_writer(non_blocking)
            .with_ansi(false);
        let stdout_layer = fmt::layer().with_target(false).with_ansi(true);
        registry.with(file_layer).with(stdout_layer).try_init()
    };
    installed.map_err(|e| anyhow!("Failed to install tracing subscriber: {}", e))?;

    Ok(guard)
}
