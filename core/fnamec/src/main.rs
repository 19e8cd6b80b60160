//! fname CLI
//!
//! Inspect and stress the process-wide name table.

use fname_table::{NameRegistry, NameTableConfig};
use fnamec::commands::{
    display_names, hash_report, intern_names, list_reserved, run_thread_test, split_names,
    DisplayOptions, ReservedFilter, ThreadTestConfig,
};

fn main() {
    fnamec::init_tracing();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        return;
    }

    let command = args[1].as_str();
    let rest = &args[2..];

    match command {
        "thread-test" => {
            let mut config = ThreadTestConfig::default();
            for arg in rest {
                if let Some(value) = arg.strip_prefix("--tests=") {
                    config.tests = parse_count("--tests", value);
                } else if let Some(value) = arg.strip_prefix("--tasks=") {
                    config.tasks = parse_count("--tasks", value);
                } else {
                    eprintln!("error: unknown option '{arg}'");
                    eprintln!("Usage: fname thread-test [--tests=N] [--tasks=N]");
                    std::process::exit(1);
                }
            }
            println!("Starting fname threading test.");
            match run_thread_test(registry(), config) {
                Ok(report) => println!("{report}"),
                Err(err) => {
                    eprintln!("error: fname threading test failed: {err}");
                    std::process::exit(1);
                }
            }
        }
        "stats" => {
            println!("{}", hash_report(registry(), rest));
        }
        "split" => {
            require_args(rest, "Usage: fname split <name>...");
            for line in split_names(rest) {
                println!("{line}");
            }
        }
        "display" => {
            let is_bool = rest.iter().any(|a| a == "--bool");
            let texts: Vec<&String> = rest.iter().filter(|a| !a.starts_with("--")).collect();
            require_args(&texts, "Usage: fname display [--bool] <name>...");
            for line in display_names(&texts, DisplayOptions { is_bool }) {
                println!("{line}");
            }
        }
        "intern" => {
            let find_only = rest.iter().any(|a| a == "--find");
            let exact = rest.iter().any(|a| a == "--exact");
            let texts: Vec<&String> = rest.iter().filter(|a| !a.starts_with("--")).collect();
            require_args(&texts, "Usage: fname intern [--find] [--exact] <name>...");
            for report in intern_names(registry(), &texts, find_only, exact) {
                println!("{report}");
            }
        }
        "reserved" => {
            let filter = if rest.iter().any(|a| a == "--networked") {
                ReservedFilter::Networked
            } else if rest.iter().any(|a| a == "--local") {
                ReservedFilter::LocalOnly
            } else {
                ReservedFilter::All
            };
            for line in list_reserved(registry(), filter) {
                println!("{line}");
            }
        }
        "help" | "--help" | "-h" => print_usage(),
        _ => {
            eprintln!("Unknown command: {command}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    }
}

/// The global registry, bootstrapped from the environment.
fn registry() -> &'static NameRegistry {
    let config = match NameTableConfig::from_env() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(1);
        }
    };
    match NameRegistry::init_global(config) {
        Ok(registry) => registry,
        Err(err) => fname_table::fatal::abort_boot(&err),
    }
}

fn require_args<T>(args: &[T], usage: &str) {
    if args.is_empty() {
        eprintln!("{usage}");
        std::process::exit(1);
    }
}

fn parse_count(flag: &str, value: &str) -> usize {
    match value.parse() {
        Ok(count) if count > 0 => count,
        _ => {
            eprintln!("error: {flag} expects a positive integer, got '{value}'");
            std::process::exit(1);
        }
    }
}

fn print_usage() {
    println!("fname - process-wide name table tools");
    println!();
    println!("Usage: fname <command> [options]");
    println!();
    println!("Commands:");
    println!("  thread-test [--tests=N] [--tasks=N]   Intern a shared table from many tasks");
    println!("  stats [name...]                       Hash table occupancy (after interning names)");
    println!("  split <name>...                       Show base string and number of each name");
    println!("  display [--bool] <name>...            Convert names to display labels");
    println!("  intern [--find] [--exact] <name>...   Intern names and show their handles");
    println!("  reserved [--networked|--local]        List the hardcoded names");
    println!();
    println!("Environment:");
    println!("  FNAME_CASE_PRESERVING=1   Keep a case-preserving display index");
    println!("  FNAME_BUCKETS=N           Hash bucket count (power of two)");
    println!("  RUST_LOG=fname_table=debug  Diagnostic logging (FNAME_LOG_TREE=1 for tree output)");
}
