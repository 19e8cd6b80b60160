//! Command handlers for the fname CLI.
//!
//! Every handler takes the registry to operate on, so tests can pass a
//! private one; the binary passes the global registry.

mod display;
mod intern;
mod reserved;
mod split;
mod stats;

pub use display::{display_names, DisplayOptions};
pub use intern::{intern_names, InternReport};
pub use reserved::{list_reserved, ReservedFilter};
pub use split::split_names;
pub use stats::{hash_report, HashReport};
pub use thread_test::{run_thread_test, ThreadTestConfig, ThreadTestError, ThreadTestReport};
