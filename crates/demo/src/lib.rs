//! Fib Demo entry point
//!
//! Writes two lines to the given writer:
//!
//! ```text
//! Starting application...
//! The 10th Fibonacci number is: 55
//! ```
//!
//! The `th` suffix is part of the fixed output format and is used for every
//! index.

use fib_core::DemoConfig;
use std::io::{self, Write};
use std::time::Instant;
use tracing::info;

/// First line written on every run
pub const START_MESSAGE: &str = "Starting application...";

/// Format the result line for `index`
pub fn result_line(index: i64, value: i64) -> String {
    format!("The {}th Fibonacci number is: {}", index, value)
}

/// Run the demo, writing its output to `out`
pub fn run<W: Write>(out: &mut W, config: &DemoConfig) -> io::Result<()> {
    writeln!(out, "{}", START_MESSAGE)?;
    out.flush()?;

    let start = Instant::now();
    let value = config.strategy.compute(config.index);
    info!(
        index = config.index,
        value,
        strategy = %config.strategy,
        elapsed = ?start.elapsed(),
        "fibonacci computed"
    );

    writeln!(out, "{}", result_line(config.index, value))?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use fib_core::Strategy;

    fn run_to_string(config: &DemoConfig) -> String {
        let mut buf = Vec::new();
        run(&mut buf, config).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_default_output() {
        assert_eq!(
            run_to_string(&DemoConfig::default()),
            "Starting application...\nThe 10th Fibonacci number is: 55\n"
        );
    }

    #[test]
    fn test_iterative_output_matches() {
        let config = DemoConfig::default().with_strategy(Strategy::Iterative);
        assert_eq!(run_to_string(&config), run_to_string(&DemoConfig::default()));
    }

    #[test]
    fn test_run_with_toml_config() {
        let config = DemoConfig::from_toml("index = 20\nstrategy = \"iterative\"").unwrap();
        assert_eq!(
            run_to_string(&config),
            "Starting application...\nThe 20th Fibonacci number is: 6765\n"
        );
    }

    #[test]
    fn test_other_index_keeps_suffix() {
        let config = DemoConfig::default().with_index(1);
        assert_eq!(
            run_to_string(&config),
            "Starting application...\nThe 1th Fibonacci number is: 1\n"
        );
    }

    #[test]
    fn test_negative_index_passes_through() {
        assert_eq!(
            result_line(-1, fib_core::calculate_fibonacci(-1)),
            "The -1th Fibonacci number is: -1"
        );
    }

    struct FailingWriter;

    impl Write for FailingWriter {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_propagates() {
        let err = run(&mut FailingWriter, &DemoConfig::default()).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::BrokenPipe);
    }
}
