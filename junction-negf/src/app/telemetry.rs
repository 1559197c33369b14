use miette::Diagnostic;
use std::{fmt, path::Path};
use tracing::{subscriber::set_global_default, Subscriber};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum LogLevel {
    Trace,
    Info,
    Debug,
    Error,
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let level = match self {
            LogLevel::Trace => "trace",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Error => "error",
        };
        write!(f, "{level}")
    }
}

#[derive(thiserror::Error, Debug, Diagnostic)]
pub enum TelemetryError {
    #[error("failed to initialise the log bridge: {0}")]
    #[diagnostic(code(junction_negf::telemetry::logger))]
    Logger(#[from] tracing_log::log::SetLoggerError),
    #[error("failed to set the global subscriber: {0}")]
    #[diagnostic(code(junction_negf::telemetry::subscriber))]
    Subscriber(#[from] tracing::subscriber::SetGlobalDefaultError),
}

/// Creates a subscriber which writes to `console::Term::stdout` and to a JSON log file `log.log`
/// located in `directory`.
///
/// `RUST_LOG` takes precedence over `level` when it is set. The returned guard flushes the file writer when dropped.
pub fn get_subscriber(
    level: LogLevel,
    directory: &Path,
) -> (
    impl Subscriber + Send + Sync,
    tracing_appender::non_blocking::WorkerGuard,
) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_string()));

    let fmt_layer = tracing_subscriber::fmt::Layer::new()
        .with_writer(console::Term::stdout)
        .without_time();

    let appender = tracing_appender::rolling::never(directory, "log.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(appender);

    (
        Registry::default().with(env_filter).with(fmt_layer).with(
            tracing_subscriber::fmt::Layer::new()
                .with_writer(non_blocking)
                .json(),
        ),
        guard,
    )
}

/// Installs `subscriber` as the global default and routes `log` records through it
pub fn init_subscriber(subscriber: impl Subscriber + Send + Sync) -> Result<(), TelemetryError> {
    LogTracer::init()?;
    set_global_default(subscriber)?;
    Ok(())
}

#[cfg(test)]
mod test {
    use super::{get_subscriber, LogLevel};

    #[test]
    fn levels_render_as_filter_directives() {
        assert_eq!(LogLevel::Trace.to_string(), "trace");
        assert_eq!(LogLevel::Error.to_string(), "error");
    }

    #[test]
    fn subscriber_writes_json_records_to_the_log_file() {
        let directory = tempfile::tempdir().unwrap();
        let (subscriber, guard) = get_subscriber(LogLevel::Info, directory.path());
        tracing::subscriber::with_default(subscriber, || {
            tracing::error!(bias = 0.01, "bias point failed");
        });
        drop(guard);
        let contents = std::fs::read_to_string(directory.path().join("log.log")).unwrap();
        assert!(contents.contains("bias point failed"));
        assert!(contents.trim_start().starts_with('{'));
    }
}
