//! Bootstrap failures abort the process.
//!
//! Each test re-runs this test binary filtered to itself with a marker
//! variable set; the child performs the failing bootstrap and the parent
//! inspects its exit status and stderr.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::process::{Command, Output};

use fname_table::{fatal, EName, NameRegistry, NameTableConfig};

const CHILD_ENV: &str = "FNAME_BOOT_FATAL_CHILD";

fn in_child() -> bool {
    std::env::var_os(CHILD_ENV).is_some()
}

fn run_child(test: &str) -> Output {
    Command::new(std::env::current_exe().unwrap())
        .args([test, "--exact", "--nocapture", "--test-threads=1"])
        .env(CHILD_ENV, "1")
        .output()
        .unwrap()
}

#[test]
fn duplicate_hardcoded_name_aborts() {
    if in_child() {
        let extra = [(EName::Engine.index(), "Rocket")];
        match NameRegistry::bootstrap_with(NameTableConfig::compact(), &extra) {
            Ok(_) => return,
            Err(err) => fatal::abort_boot(&err),
        }
    }

    let output = run_child("duplicate_hardcoded_name_aborts");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("fatal: name table bootstrap failed"), "{stderr}");
    assert!(stderr.contains("'Rocket'"), "{stderr}");
    assert!(stderr.contains("'Engine'"), "{stderr}");
    assert!(stderr.contains("index 31"), "{stderr}");
}

#[test]
fn watermark_above_reserved_range_aborts() {
    if in_child() {
        let config = NameTableConfig::compact().with_network_watermark(EName::MAX_INDEX + 1);
        NameRegistry::bootstrap_or_abort(config);
        return;
    }

    let output = run_child("watermark_above_reserved_range_aborts");
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("network watermark"), "{stderr}");
    assert!(stderr.contains("603"), "{stderr}");
}

#[test]
fn valid_bootstrap_does_not_abort() {
    if in_child() {
        NameRegistry::bootstrap_or_abort(NameTableConfig::compact());
        return;
    }

    let output = run_child("valid_bootstrap_does_not_abort");
    assert!(output.status.success());
}
