//! Small feature-gated logger for native CLI binaries.
//!
//! Levels are compiled in via features and filtered at runtime:
//! - `warn!` and `error!` are always available and go to stderr.
//! - `info!` needs the `log-info` feature.
//! - `debug!` needs the `log-debug` feature plus a runtime flag.
//! - `verbose!` (feature `verbose`) is an untagged printer that never goes to
//!   the log file.
//! - With `file-logging`, an initialized log file captures tagged messages
//!   instead of the console.

use std::fmt::Arguments;
#[cfg(any(feature = "log-debug", feature = "verbose"))]
use std::sync::atomic::AtomicBool;
use std::sync::atomic::{AtomicU8, Ordering};

#[cfg(feature = "file-logging")]
use std::{
    fs::{File, OpenOptions},
    io::Write,
    sync::{LazyLock, Mutex},
};

/// Logging levels, ordered by severity.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Level {
    /// Always emitted.
    Error = 1,
    /// Always emitted.
    Warn = 2,
    /// Gated behind the `log-info` feature.
    Info = 3,
    /// Gated behind the `log-debug` feature and a runtime flag.
    Debug = 4,
}

impl Level {
    /// The compile-time default: the most detailed level the enabled
    /// features allow.
    const fn default_for_features() -> Self {
        if cfg!(feature = "log-debug") {
            Self::Debug
        } else if cfg!(feature = "log-info") {
            Self::Info
        } else {
            Self::Warn
        }
    }

    const fn tag(self) -> &'static str {
        match self {
            Self::Error => "[ERROR]",
            Self::Warn => "[WARN]",
            Self::Info => "[INFO]",
            Self::Debug => "[DEBUG]",
        }
    }
}

/// Current runtime level (as a `Level` discriminant).
static CURRENT_LEVEL: AtomicU8 = AtomicU8::new(Level::default_for_features() as u8);

/// Runtime switch for `debug!` output.
#[cfg(feature = "log-debug")]
static DEBUG_ENABLED: AtomicBool = AtomicBool::new(true);

/// Runtime switch for `verbose!` output.
#[cfg(feature = "verbose")]
static VERBOSE_ENABLED: AtomicBool = AtomicBool::new(false);

/// Active log file, once initialized.
#[cfg(feature = "file-logging")]
static FILE_SINK: LazyLock<Mutex<Option<File>>> = LazyLock::new(|| Mutex::new(None));

/// Set the global log level.
pub fn set_level(level: Level) {
    CURRENT_LEVEL.store(level as u8, Ordering::SeqCst);
}

/// Parse and set level from a string (case-insensitive). Returns true on success.
#[must_use]
pub fn set_level_from_str(level: &str) -> bool {
    let parsed = match level.to_ascii_lowercase().as_str() {
        "error" | "err" => Level::Error,
        "warn" | "warning" => Level::Warn,
        "info" => Level::Info,
        "debug" => Level::Debug,
        _ => return false,
    };
    set_level(parsed);
    true
}

/// Turn `debug!` output on (no-op without the `log-debug` feature).
pub fn enable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn `debug!` output off (no-op without the `log-debug` feature).
pub fn disable_debug() {
    #[cfg(feature = "log-debug")]
    DEBUG_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `debug!` output is currently on (always false without `log-debug`).
#[must_use]
pub fn is_debug_enabled() -> bool {
    #[cfg(feature = "log-debug")]
    {
        DEBUG_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "log-debug"))]
    {
        false
    }
}

/// Turn `verbose!` output on (no-op without the `verbose` feature).
pub fn enable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(true, Ordering::SeqCst);
}

/// Turn `verbose!` output off (no-op without the `verbose` feature).
pub fn disable_verbose() {
    #[cfg(feature = "verbose")]
    VERBOSE_ENABLED.store(false, Ordering::SeqCst);
}

/// Whether `verbose!` output is currently on (always false without `verbose`).
#[must_use]
pub fn is_verbose_enabled() -> bool {
    #[cfg(feature = "verbose")]
    {
        VERBOSE_ENABLED.load(Ordering::SeqCst)
    }
    #[cfg(not(feature = "verbose"))]
    {
        false
    }
}

/// Start appending tagged log messages to the file at `path`.
/// Returns true on success; false on failure or without `file-logging`.
#[must_use]
pub fn init_file_logging(path: &std::path::Path) -> bool {
    #[cfg(feature = "file-logging")]
    {
        OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .is_ok_and(|file| {
                if let Ok(mut sink) = FILE_SINK.lock() {
                    *sink = Some(file);
                    true
                } else {
                    false
                }
            })
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = path;
        false
    }
}

/// Try to hand the message to the file sink. Returns true when consumed.
fn file_sink_write(tag: &str, msg: &str) -> bool {
    #[cfg(feature = "file-logging")]
    {
        let Ok(mut sink) = FILE_SINK.lock() else {
            return false;
        };
        let Some(ref mut file) = *sink else {
            return false;
        };
        let _ = writeln!(file, "{tag} {msg}");
        let _ = file.flush();
        true
    }
    #[cfg(not(feature = "file-logging"))]
    {
        let _ = (tag, msg);
        false
    }
}

/// Feature gates first, then the runtime level; debug additionally needs its
/// runtime flag.
fn should_log(level: Level) -> bool {
    let feature_ok = match level {
        Level::Info => cfg!(feature = "log-info"),
        Level::Debug => cfg!(feature = "log-debug") && is_debug_enabled(),
        Level::Error | Level::Warn => true,
    };
    feature_ok && (level as u8) <= CURRENT_LEVEL.load(Ordering::SeqCst)
}

/// Dispatch behind the public macros. Suppressed messages cost only the
/// level check; emitted ones go to the file sink when active, otherwise to
/// stderr (errors/warnings) or stdout (info/debug).
pub fn log_impl(level: Level, args: Arguments) {
    if !should_log(level) {
        return;
    }
    let msg = args.to_string();
    let tag = level.tag();

    if file_sink_write(tag, &msg) {
        return;
    }

    match level {
        Level::Error | Level::Warn => eprintln!("{tag} {msg}"),
        Level::Info | Level::Debug => println!("{tag} {msg}"),
    }
}

#[macro_export]
/// Logs an error-level message (always enabled). Emits to stderr.
macro_rules! error {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Error, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a warning-level message (always enabled). Emits to stderr.
macro_rules! warn {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Warn, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs an info-level message (requires the `log-info` feature).
macro_rules! info {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Info, format_args!($($arg)*)) };
}

#[macro_export]
/// Logs a debug-level message (requires the `log-debug` feature and runtime enablement).
macro_rules! debug {
    ($($arg:tt)*) => { $crate::log_impl($crate::Level::Debug, format_args!($($arg)*)) };
}

#[macro_export]
/// Prints a verbose message (requires the `verbose` feature and runtime
/// enablement). Untagged, and never written to the log file.
macro_rules! verbose {
    ($($arg:tt)*) => {
        #[cfg(feature = "verbose")]
        {
            if $crate::is_verbose_enabled() {
                println!($($arg)*);
            }
        }
    };
}
