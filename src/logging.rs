use tracing::Level;
use tracing_appender::non_blocking::WorkerGuard;

/// File the binaries log to, in the working directory.
pub const LOG_FILE: &str = "mazeshift.log";

/// Installs the global subscriber writing to [`LOG_FILE`].
///
/// `DEBUG=1` raises the level to debug. The returned guard flushes the writer on
/// drop and must be held for as long as the process logs.
pub fn init_tracing() -> WorkerGuard {
    let level = match std::env::var("DEBUG") {
        Ok(val) if val == "1" => Level::DEBUG,
        _ => Level::INFO,
    };
    let file_appender = tracing_appender::rolling::never(".", LOG_FILE);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(level)
        .init();
    guard
}
