//! Error types for the validated Fibonacci API.

/// Error returned by [`crate::checked_fibonacci`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FibError {
    /// The index is negative, so F(n) is undefined
    InvalidArgument { index: i64 },
    /// F(index) does not fit in a `u64`
    Overflow { index: i64 },
}

impl FibError {
    /// The index that was rejected
    pub fn index(&self) -> i64 {
        match self {
            FibError::InvalidArgument { index } | FibError::Overflow { index } => *index,
        }
    }
}

impl std::fmt::Display for FibError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FibError::InvalidArgument { index } => {
                write!(f, "invalid argument: index must be non-negative, got {}", index)
            }
            FibError::Overflow { index } => write!(
                f,
                "overflow: F({}) does not fit in 64 bits (max index is {})",
                index,
                crate::MAX_CHECKED_INDEX
            ),
        }
    }
}

impl std::error::Error for FibError {}
