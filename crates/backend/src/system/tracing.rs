use crate::shared::config::{resolve_dir, LoggingConfig};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise tracing
///
/// Logs go to:
/// - stdout (with colours)
/// - `<log_dir>/backend.log` (without colours)
///
/// `RUST_LOG` takes precedence over `logging.level`.
pub fn initialize(config: &LoggingConfig) -> anyhow::Result<PathBuf> {
    let log_dir = resolve_dir(&config.log_dir);
    std::fs::create_dir_all(&log_dir).map_err(|e| {
        anyhow::anyhow!("Cannot create log directory {}: {}", log_dir.display(), e)
    })?;

    let log_file_path = log_dir.join("backend.log");
    let log_file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)
        .map_err(|e| {
            anyhow::anyhow!("Cannot open log file {}: {}", log_file_path.display(), e)
        })?;

    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| filter_directive(&config.level));

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&log_level))
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::sync::Arc::new(log_file))
                .with_ansi(false),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("Cannot initialise tracing: {}", e))?;

    tracing::info!("Log level: {}", log_level);
    tracing::info!("Log file: {}", log_file_path.display());

    Ok(log_file_path)
}

/// Application level plus quieter HTTP internals
fn filter_directive(level: &str) -> String {
    format!("{},hyper=warn,tower_http=warn", level)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filter_directive_keeps_level_first() {
        assert_eq!(filter_directive("debug"), "debug,hyper=warn,tower_http=warn");
    }
}
