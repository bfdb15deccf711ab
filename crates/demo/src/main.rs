//! fibdemo
//!
//! Prints a start line, computes F(10) by naive recursion, prints the
//! result. Takes no arguments; attach a debugger while it runs.

use clap::Parser as ClapParser;
use fib_core::DemoConfig;
use std::io;
use std::process;
use tracing::debug;

#[derive(ClapParser)]
#[command(name = "fibdemo")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute the 10th Fibonacci number by naive recursion", long_about = None)]
struct Cli {}

/// Log filter used when `RUST_LOG` is unset
const DEFAULT_LOG_FILTER: &str = "fib_demo=warn,fib_core=warn";

fn main() {
    let _cli = Cli::parse();

    // Logs go to stderr; stdout carries only the two result lines
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    debug!(pid = process::id(), "fibdemo starting");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if let Err(e) = fib_demo::run(&mut out, &DemoConfig::default()) {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}
