/// Macro for prefixed status logging to stderr (only when stderr is a terminal).
///
/// Usage:
/// ```ignore
/// log_status!("db", "Connection to {} failed: {}", path, err);
/// ```
#[macro_export]
macro_rules! log_status {
    ($prefix:expr, $($arg:tt)*) => {
        if ::std::io::IsTerminal::is_terminal(&::std::io::stderr()) {
            eprintln!(concat!("[", $prefix, "] {}"), format_args!($($arg)*));
        }
    };
}

pub mod commandline;
pub mod datetime;
pub mod db;
pub mod error;
pub mod fs_search;
pub mod harness;
pub mod path;
pub mod shell;
pub mod slug;
pub mod template;
pub mod url;
pub mod validation;

// Re-export common types for convenience
pub use error::{Error, ErrorCode, Result};
