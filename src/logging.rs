use std::env;
use std::ffi::OsStr;
use std::io;
use std::path::Path;

use once_cell::sync::OnceCell;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, layer::SubscriberExt, EnvFilter};

static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Our own placement and session events at debug, everything else quiet
const DEFAULT_FILTER: &str = "warn,blockbuilder=debug";
const DEFAULT_LOG_FILE: &str = "logs/blockbuilder.log";

/// Daily-rotated file under `RUST_LOG_FILE`'s directory. The worker guard
/// lives for the rest of the process.
fn session_log_writer() -> NonBlocking {
    let log_path = env::var("RUST_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());
    let log_path = Path::new(&log_path);
    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::daily(
        log_path.parent().unwrap_or(Path::new(".")),
        log_path.file_name().unwrap_or(OsStr::new("blockbuilder.log")),
    ));
    let _ = FILE_GUARD.set(guard);
    writer
}

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    // Console (stderr) layer with file/line
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .compact();

    let file_layer = fmt::layer()
        .with_writer(session_log_writer())
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .with_level(true)
        .compact();

    // try_init: a second call (tests, embedding) keeps the first subscriber
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(console_layer)
        .with(file_layer)
        .try_init();

    // Hook panics to log with backtrace
    std::panic::set_hook(Box::new(|info| {
        let mut msg = String::new();
        if let Some(loc) = info.location() {
            msg.push_str(&format!("panic at {}:{}:{} ", loc.file(), loc.line(), loc.column()));
        }
        if let Some(s) = info.payload().downcast_ref::<&str>() {
            msg.push_str(s);
        } else if let Some(s) = info.payload().downcast_ref::<String>() {
            msg.push_str(s);
        } else {
            msg.push_str("<non-string panic>");
        }
        let bt = std::backtrace::Backtrace::force_capture();
        tracing::error!("{}\nBacktrace:\n{:?}", msg, bt);
    }));
}
