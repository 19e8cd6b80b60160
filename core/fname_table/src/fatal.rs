//! Process-fatal reporting.
//!
//! A broken name table cannot be recovered from: handles already given out
//! would point at the wrong strings. These functions log the full
//! diagnostic, print it to stderr (logging may not be initialized this
//! early), and abort.

use crate::error::BootError;

/// Report a bootstrap failure and abort the process.
#[cold]
pub fn abort_boot(err: &BootError) -> ! {
    tracing::error!(error = %err, "name table bootstrap failed");
    eprintln!("fatal: name table bootstrap failed: {err}");
    std::process::abort()
}

/// Report a runtime invariant violation and abort the process.
#[cold]
pub fn abort_runtime(message: &str) -> ! {
    tracing::error!(message, "name table invariant violated");
    eprintln!("fatal: name table invariant violated: {message}");
    std::process::abort()
}
