// reflect_core/src/logging/logging.rs
use crate::constants::LOG_BASENAME;
use crate::storage::editor_config::{app_dir, EditorConfig};
use flexi_logger::*;
use log::Record;
use once_cell::sync::Lazy;
use std::io::Write;
use std::sync::Mutex;

// Most recent on-screen message, shown by the editor status line.
pub static LAST_LOG: Lazy<Mutex<String>> = Lazy::new(|| Mutex::new(String::new()));

/// Logs a message and keeps it as the latest on-screen message.
#[macro_export]
macro_rules! onscreen_log {
    ($lvl:expr, $($arg:tt)*) => {{
        let msg = format!($($arg)*);
        log::log!($lvl, "{}", msg);
        if let Ok(mut buf) = $crate::logging::logging::LAST_LOG.lock() {
            *buf = msg;
        }
    }};
}

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_info  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Info,  $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_warn  { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Warn,  $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_error { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Error, $($arg)*) }; }

/// Helper macro that allow logs to be displayed by the program.
#[macro_export]
macro_rules! onscreen_debug { ($($arg:tt)*) => { $crate::onscreen_log!(log::Level::Debug, $($arg)*) }; }

/// The latest on-screen message, empty when nothing was logged yet.
pub fn last_log() -> String {
    LAST_LOG.lock().map(|buf| buf.clone()).unwrap_or_default()
}

/// Starts the rotating file logger. Keep the handle alive for the whole run.
pub fn init_file_logger(config: &EditorConfig) -> Result<LoggerHandle, FlexiLoggerError> {
    let log_dir = app_dir().join("logs");

    let file_spec = FileSpec::default()
        .directory(&log_dir)
        .basename(LOG_BASENAME)
        .suffix("log");

    let handle = Logger::try_with_str(&config.log_level)?
        .log_to_file(file_spec)
        .format(log_formatter)
        .duplicate_to_stderr(Duplicate::Warn)
        .rotate(
            Criterion::Size(5_000_000),
            Naming::Numbers,
            Cleanup::KeepLogFiles(config.log_files_kept),
        )
        .write_mode(WriteMode::BufferAndFlush)
        .start()?;

    onscreen_info!("Log dir: {}.", log_dir.display());
    Ok(handle)
}

fn log_formatter(
    write: &mut dyn Write,
    now: &mut DeferredNow,
    record: &Record,
) -> std::io::Result<()> {
    write!(
        write,
        "{} {:5} [{}] {}",
        now.format("%Y-%m-%d %H:%M:%S%.3f"),
        record.level(),
        record.module_path().unwrap_or("<unknown>"),
        &record.args()
    )
}
