use std::sync::Once;

/// Logger configuration.
///
/// `env_filter` follows the `env_logger` filter syntax (e.g. "info",
/// "strata_render=debug,wgpu=warn"). When unset, `RUST_LOG` is used, then
/// `info`.
///
/// Asset and draw diagnostics use these levels:
/// - `warn`: a package could not be resolved
/// - `info`: on-the-fly package loads, skipped draws
/// - `debug`: per-file load failures, package load summaries
/// - `trace`: draws skipped for an asset of the wrong kind
#[derive(Debug, Clone)]
pub struct LoggingConfig {
    pub env_filter: Option<String>,
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

static INIT: Once = Once::new();

/// Initializes the global logger once; later calls are ignored.
///
/// Fails silently if another logger was installed first, so a host
/// application's logger always wins.
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

        if builder.try_init().is_ok() {
            log::debug!("logging initialized");
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init_logging(LoggingConfig {
            env_filter: Some("strata_render=trace".into()),
            ..LoggingConfig::default()
        });
        init_logging(LoggingConfig::default());
        log::trace!("still alive");
    }
}
