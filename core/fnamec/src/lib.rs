//! fname command-line tools.
//!
//! Inspection and stress commands over the process-wide name table. Each
//! command returns a report value; the binary prints it.

use std::sync::Once;

pub mod commands;

/// Set to use the hierarchical `tracing-tree` output instead of flat lines.
pub const ENV_LOG_TREE: &str = "FNAME_LOG_TREE";

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for diagnostic output.
///
/// Safe to call multiple times. Does nothing unless `RUST_LOG` is set, e.g.
/// `RUST_LOG=fname_table=debug`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }
        let filter = EnvFilter::from_default_env();
        if std::env::var_os(ENV_LOG_TREE).is_some() {
            tracing_subscriber::registry()
                .with(tracing_tree::HierarchicalLayer::new(2).with_targets(true))
                .with(filter)
                .init();
        } else {
            tracing_subscriber::registry()
                .with(
                    fmt::layer()
                        .with_target(true)
                        .with_level(true)
                        .with_writer(std::io::stderr),
                )
                .with(filter)
                .init();
        }
    });
}
