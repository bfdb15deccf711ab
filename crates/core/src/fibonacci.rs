//! Fibonacci calculator
//!
//! `calculate_fibonacci` is the workload: unmemoized binary recursion, so a
//! run of F(n) builds a call tree of O(φⁿ) frames with depth n. That is the
//! point; a debugger attached to the process always has a deep, busy stack
//! to look at.
//!
//! # Negative indices
//!
//! The base case is `n <= 1`, so every negative index is returned unchanged
//! (`calculate_fibonacci(-5) == -5`). Callers that want negative input
//! rejected use [`checked_fibonacci`], which returns
//! [`FibError::InvalidArgument`] instead.
//!
//! # Overflow
//!
//! F(92) is the largest value that fits in an `i64`. [`fibonacci_iterative`]
//! panics past that point in every build profile. [`calculate_fibonacci`]
//! cannot get there in practical time. [`checked_fibonacci`] works in `u64`
//! and returns an error past [`MAX_CHECKED_INDEX`] instead of panicking.

use crate::error::FibError;
use serde::Deserialize;
use tracing::debug;

/// Largest index whose Fibonacci number fits in an `i64`: F(92) = 7540113804746346429
pub const MAX_I64_INDEX: i64 = 92;

/// Largest index whose Fibonacci number fits in a `u64`: F(93) = 12200160415121876738
pub const MAX_CHECKED_INDEX: i64 = 93;

/// Compute F(n) by direct recursion on F(n) = F(n-1) + F(n-2).
///
/// Never inlined, so each level of the recursion is a real frame.
#[inline(never)]
pub fn calculate_fibonacci(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    calculate_fibonacci(n - 1) + calculate_fibonacci(n - 2)
}

/// Compute F(n) in O(n) time and O(1) space.
///
/// Same contract as [`calculate_fibonacci`], including the negative
/// pass-through.
///
/// # Panics
/// If `n > MAX_I64_INDEX`, since F(n) does not fit in an `i64`
pub fn fibonacci_iterative(n: i64) -> i64 {
    if n <= 1 {
        return n;
    }
    let (mut prev, mut curr) = (0i64, 1i64);
    for _ in 1..n {
        let next = prev
            .checked_add(curr)
            .unwrap_or_else(|| panic!("fibonacci_iterative: F({}) overflows i64", n));
        prev = curr;
        curr = next;
    }
    curr
}

/// Which form of the calculator to run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Naive binary recursion (the demo workload)
    #[default]
    Recursive,
    /// Linear loop
    Iterative,
}

impl Strategy {
    /// Run the selected form on `n`
    ///
    /// # Panics
    /// `Strategy::Iterative` panics if `n > MAX_I64_INDEX`
    pub fn compute(self, n: i64) -> i64 {
        debug!(strategy = %self, n, "computing fibonacci");
        match self {
            Strategy::Recursive => calculate_fibonacci(n),
            Strategy::Iterative => fibonacci_iterative(n),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Strategy::Recursive => "recursive",
            Strategy::Iterative => "iterative",
        }
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Compute F(n), rejecting indices the unchecked functions get wrong.
///
/// - `n < 0` → [`FibError::InvalidArgument`]
/// - `n > MAX_CHECKED_INDEX` → [`FibError::Overflow`]
pub fn checked_fibonacci(n: i64, strategy: Strategy) -> Result<u64, FibError> {
    if n < 0 {
        debug!(n, "rejecting negative index");
        return Err(FibError::InvalidArgument { index: n });
    }
    if n > MAX_CHECKED_INDEX {
        debug!(n, "rejecting index past u64 range");
        return Err(FibError::Overflow { index: n });
    }

    let n = n as u64;
    let value = match strategy {
        Strategy::Recursive => recursive_unsigned(n),
        Strategy::Iterative => iterative_unsigned(n),
    };
    Ok(value)
}

#[inline(never)]
fn recursive_unsigned(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    recursive_unsigned(n - 1) + recursive_unsigned(n - 2)
}

fn iterative_unsigned(n: u64) -> u64 {
    if n <= 1 {
        return n;
    }
    let (mut prev, mut curr) = (0u64, 1u64);
    for _ in 1..n {
        let next = prev + curr;
        prev = curr;
        curr = next;
    }
    curr
}
