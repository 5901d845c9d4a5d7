use std::sync::Once;

/// Logger configuration for hosting applications.
///
/// `filter` follows the `env_logger` syntax ("warn",
/// "plotink_render=debug,image=warn"); when absent, `RUST_LOG` and then a
/// warn-level default apply. Font fallback diagnostics are emitted at warn,
/// cache activity at debug.
#[derive(Debug, Clone, Default)]
pub struct LoggingConfig {
    pub filter: Option<String>,
    pub color: bool,
}

static INIT: Once = Once::new();

/// Installs the global logger. Idempotent; later calls are ignored, so
/// embedders that already configured `log` keep their logger.
pub fn init_logging(config: &LoggingConfig) {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();

        match (&config.filter, std::env::var("RUST_LOG").ok()) {
            (Some(filter), _) => {
                builder.parse_filters(filter);
            }
            (None, Some(env)) => {
                builder.parse_filters(&env);
            }
            (None, None) => {
                builder.filter_level(log::LevelFilter::Warn);
            }
        }

        builder.write_style(if config.color {
            env_logger::WriteStyle::Auto
        } else {
            env_logger::WriteStyle::Never
        });
        builder.init();
    });
}
