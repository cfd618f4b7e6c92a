use color_eyre::eyre::Result;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_error::ErrorLayer;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer,
};
use super::LogConfig;
use super::LOG_FILENAME;

/// Initialize logging: every event goes to the rolling log file, and the
/// same events are echoed to stderr so stdout stays free for listings.
///
/// `RUST_LOG` overrides the default `campus_lostfound=<level>` filter.
pub fn init_logging(config: LogConfig) -> Result<()> {
    std::fs::create_dir_all(&config.log_dir)?;
    let directive = config.default_directive();
    let file_appender = RollingFileAppender::new(config.rotation, &config.log_dir, LOG_FILENAME);
    let filter = || {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&directive))
    };
    if config.json_format {
        let json_file_layer = fmt::layer()
            .json().with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true).with_filter(filter());
        let json_stderr_layer = fmt::layer()
            .json().with_writer(std::io::stderr).with_span_events(FmtSpan::CLOSE)
            .with_current_span(true).with_target(true).with_filter(filter());
        tracing_subscriber::registry()
            .with(json_file_layer).with(json_stderr_layer).with(ErrorLayer::default()).try_init()?;
    } else {
        let file_layer = fmt::layer()
            .with_writer(file_appender).with_span_events(FmtSpan::CLOSE)
            .with_target(true).with_ansi(false).with_filter(filter());
        let stderr_layer = fmt::layer()
            .with_writer(std::io::stderr).with_target(false)
            .with_ansi(true).with_filter(filter());
        tracing_subscriber::registry()
            .with(file_layer).with(stderr_layer).with(ErrorLayer::default()).try_init()?;
    }
    Ok(())
}

/// Parse rotation period from string; anything unrecognised is daily.
#[must_use]
pub fn parse_rotation(s: &str) -> Rotation {
    match s.trim().to_lowercase().as_str() {
        "hourly" => Rotation::HOURLY,
        "never" => Rotation::NEVER,
        _ => Rotation::DAILY,
    }
}
