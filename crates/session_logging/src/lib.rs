#![deny(missing_docs)]
//! Shared logging utilities for the webhook workspace.
//!
//! This crate provides the `session_*` logging macros used across the codebase
//! and a minimal test initializer for the global logger. Every line logged
//! through the macros is prefixed with the current dispatch sequence number so
//! engine output can be correlated with the message that caused it.

use std::sync::atomic::{AtomicU64, Ordering};

/// Sequence number of the message currently being dispatched.
static DISPATCH_SEQ: AtomicU64 = AtomicU64::new(0);

/// Sets the dispatch sequence number.
/// The application loop calls this once per dispatched message.
pub fn set_dispatch_seq(seq: u64) {
    DISPATCH_SEQ.store(seq, Ordering::Relaxed);
}

/// Retrieves the dispatch sequence number.
/// Returns 0 before the first message has been dispatched.
pub fn dispatch_seq() -> u64 {
    DISPATCH_SEQ.load(Ordering::Relaxed)
}

/// Logs a trace-level message using the global logging facade.
#[macro_export]
macro_rules! session_trace {
    ($($arg:tt)*) => {{
        log::trace!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs an info-level message using the global logging facade.
#[macro_export]
macro_rules! session_info {
    ($($arg:tt)*) => {{
        log::info!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs a debug-level message using the global logging facade.
#[macro_export]
macro_rules! session_debug {
    ($($arg:tt)*) => {{
        log::debug!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs a warn-level message using the global logging facade.
#[macro_export]
macro_rules! session_warn {
    ($($arg:tt)*) => {{
        log::warn!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Logs an error-level message using the global logging facade.
#[macro_export]
macro_rules! session_error {
    ($($arg:tt)*) => {{
        log::error!("[d{}] {}", $crate::dispatch_seq(), format_args!($($arg)*));
    }};
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    use simplelog::{ColorChoice, CombinedLogger, Config, TermLogger, TerminalMode};

    let level = if cfg!(debug_assertions) {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };

    // Another test may have installed the logger already.
    let _ = CombinedLogger::init(vec![TermLogger::new(
        level,
        Config::default(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch_seq_round_trips() {
        set_dispatch_seq(41);
        assert_eq!(dispatch_seq(), 41);
        set_dispatch_seq(0);
    }
}
