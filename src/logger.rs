//! Terminal logging macros.
//!
//! Every line carries a colourised level tag and the UTC wall-clock time. Warnings and errors go
//! to stderr. `event!` traces individual parameter changes and is only emitted when
//! `LOG_ROVERPOINT_EVENTS` is set, as it fires at the control tick rate.

/// Environment variable enabling the `event!` trace.
pub const EVENT_LOG_VAR: &str = "LOG_ROVERPOINT_EVENTS";

/// Returns `true` if the per-change event trace is enabled.
pub fn events_enabled() -> bool { std::env::var_os(EVENT_LOG_VAR).is_some() }

#[macro_export]
macro_rules! info {
    ($($arg:tt)*) => {
        println!("\x1b[32m[INFO] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S%.3f"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        println!("\x1b[33m[LOG]  [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S%.3f"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! warn {
    ($($arg:tt)*) => {
        eprintln!("\x1b[35m[WARN] [{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S%.3f"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! error {
    ($($arg:tt)*) => {
        eprintln!("\x1b[31m[ERROR][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S%.3f"), format!($($arg)*))
    };
}

#[macro_export]
macro_rules! event {
    ($($arg:tt)*) => {
        if $crate::logger::events_enabled() {
            println!("\x1b[36m[EVENT][{}]\x1b[0m {}", chrono::Utc::now().format("%H:%M:%S%.3f"), format!($($arg)*))
        }
    };
}
