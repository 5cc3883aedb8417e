//! Usage: Process-wide tracing setup (stderr + daily-rolling file under the app data dir).

use std::sync::OnceLock;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::{fmt, EnvFilter, Registry};

const DEFAULT_FILTER: &str = "info";
const LOG_FILE_PREFIX: &str = "messenger-desktop";
const LOG_FILE_SUFFIX: &str = "log";
const MAX_LOG_FILES: usize = 7;

static FILE_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

fn file_appender(app: &tauri::AppHandle) -> Result<RollingFileAppender, String> {
    let dir = crate::app_paths::logs_dir(app)?;
    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(LOG_FILE_PREFIX)
        .filename_suffix(LOG_FILE_SUFFIX)
        .max_log_files(MAX_LOG_FILES)
        .build(&dir)
        .map_err(|e| format!("failed to create log appender in {}: {e}", dir.display()))
}

pub(crate) fn init(app: &tauri::AppHandle) {
    let file_layer = match file_appender(app) {
        Ok(appender) => {
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let _ = FILE_GUARD.set(guard);
            Some(fmt::layer().with_ansi(false).with_writer(writer))
        }
        Err(err) => {
            eprintln!("file logging disabled: {err}");
            None
        }
    };

    let subscriber = Registry::default()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer);

    if tracing::subscriber::set_global_default(subscriber).is_err() {
        return;
    }

    // Tauri and its plugins log through the `log` facade.
    if let Err(err) = tracing_log::LogTracer::init() {
        tracing::debug!("log bridge not installed: {}", err);
    }
}
