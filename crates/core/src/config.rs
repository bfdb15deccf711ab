//! Demo configuration
//!
//! The demo binary always runs with [`DemoConfig::default`]: index 10,
//! recursive strategy, and never reads a config file. [`DemoConfig::from_toml`]
//! exists only for library callers that drive `fib_demo::run` themselves:
//!
//! ```toml
//! index = 25
//! strategy = "iterative"
//! ```
//!
//! Missing keys fall back to their defaults.

use crate::fibonacci::Strategy;
use serde::Deserialize;

/// Index computed when nothing else is configured
pub const DEFAULT_INDEX: i64 = 10;

/// What the entry point computes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DemoConfig {
    /// Which Fibonacci number to compute
    pub index: i64,
    /// Which calculator form to run
    pub strategy: Strategy,
}

impl Default for DemoConfig {
    fn default() -> Self {
        DemoConfig {
            index: DEFAULT_INDEX,
            strategy: Strategy::default(),
        }
    }
}

impl DemoConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, String> {
        toml::from_str(toml_str).map_err(|e| format!("Failed to parse demo config: {}", e))
    }

    pub fn with_index(mut self, index: i64) -> Self {
        self.index = index;
        self
    }

    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }
}
