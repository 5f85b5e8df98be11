//! Logging Infrastructure
//!
//! - Console output, level from `LOG_LEVEL` (or `RUST_LOG` when set)
//! - Optional daily rotating files under `LOG_DIR`:
//!   `app/` for everything except the `security` target, `security/` for it

use std::fs;
use std::path::Path;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, Layer, fmt, prelude::*};

/// Initialize the logging system
///
/// # Examples
/// ```no_run
/// // console only
/// cafe_server::init_logger("debug", None).unwrap();
///
/// // console + files
/// cafe_server::init_logger("info", Some("./data/logs")).unwrap();
/// ```
pub fn init_logger(level: &str, log_dir: Option<&str>) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    let subscriber = tracing_subscriber::registry()
        .with(env_filter)
        .with(console_layer);

    let Some(dir) = log_dir else {
        subscriber.try_init()?;
        return Ok(());
    };

    let log_dir = Path::new(dir);
    let app_log_dir = log_dir.join("app");
    let security_log_dir = log_dir.join("security");
    fs::create_dir_all(&app_log_dir)?;
    fs::create_dir_all(&security_log_dir)?;

    let app_log = RollingFileAppender::new(Rotation::DAILY, app_log_dir, "app");
    let app_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(app_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() != "security"
        }));

    let security_log = RollingFileAppender::new(Rotation::DAILY, security_log_dir, "security");
    let security_layer = fmt::layer()
        .with_target(true)
        .with_ansi(false)
        .with_writer(std::sync::Mutex::new(security_log))
        .with_filter(tracing_subscriber::filter::filter_fn(|meta| {
            meta.target() == "security"
        }));

    subscriber.with(app_layer).with(security_layer).try_init()?;
    Ok(())
}

/// Security log helper - records authentication and authorization events
///
/// # Examples
/// ```ignore
/// security_log!(WARN, "auth_failed", email = %email, reason = "invalid_password");
/// security_log!(INFO, "login", user_id = %user.id);
/// ```
#[macro_export]
macro_rules! security_log {
    (WARN, $event:expr, $($arg:tt)*) => {
        tracing::warn!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "WARN",
            $($arg)*
        );
    };
    (INFO, $event:expr, $($arg:tt)*) => {
        tracing::info!(
            target: "security",
            event = $event,
            timestamp = chrono::Local::now().to_rfc3339(),
            level = "INFO",
            $($arg)*
        );
    };
}
