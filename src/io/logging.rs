//! Logger initialization for the command-line tool

use std::sync::Once;

/// Logger configuration
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info", "warn",
/// "panelmatrix=debug").
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    /// Explicit filter; falls back to `RUST_LOG`, then `info`
    pub env_filter: Option<String>,
    /// ANSI colouring behaviour
    pub write_style: env_logger::WriteStyle,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            env_filter: None,
            write_style: env_logger::WriteStyle::Auto,
        }
    }
}

impl LoggingConfig {
    /// Configuration that only lets warnings and errors through
    pub fn quiet() -> Self {
        Self {
            env_filter: Some("warn".to_string()),
            ..Self::default()
        }
    }
}

static INIT: Once = Once::new();

/// Initialize the global logger once
///
/// Subsequent calls are ignored.
pub fn init_logging(config: LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        if let Some(filter) = config.env_filter {
            builder.parse_filters(&filter);
        } else if let Ok(filter) = std::env::var("RUST_LOG") {
            builder.parse_filters(&filter);
        } else {
            builder.filter_level(log::LevelFilter::Info);
        }

        builder.write_style(config.write_style);

        // Another logger may already be installed (e.g. by a test harness)
        if builder.try_init().is_err() {
            return;
        }

        log::debug!("logging initialized");
    });
}
