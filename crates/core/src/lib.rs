//! Fib Core: the workload behind the debugger attach demo
//!
//! # Modules
//!
//! - `fibonacci`: the recursive calculator, an iterative equivalent, and a
//!   validated entry point
//! - `error`: error kinds for the validated entry point
//! - `config`: what the demo entry point computes

pub mod config;
pub mod error;
pub mod fibonacci;

pub use config::{DEFAULT_INDEX, DemoConfig};
pub use error::FibError;
pub use fibonacci::{
    MAX_CHECKED_INDEX, MAX_I64_INDEX, Strategy, calculate_fibonacci, checked_fibonacci,
    fibonacci_iterative,
};
