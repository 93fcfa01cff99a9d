//! Error types for the pendulum simulation.

use thiserror::Error;

/// Errors produced by the simulation core.
///
/// Validation happens atomically before any output is produced; there is no
/// partial-failure mode.
#[derive(Debug, Error, PartialEq)]
pub enum PendulumError {
    /// A parameter value produces degenerate results (division by zero or a
    /// non-positive period / frame timing).
    #[error("invalid parameter {name}: {value} (must be > 0)")]
    InvalidParameter {
        /// Name of the offending parameter
        name: &'static str,
        /// The rejected value
        value: f64,
    },
}

impl PendulumError {
    /// Shorthand constructor used by parameter validation.
    pub(crate) fn invalid(name: &'static str, value: f64) -> Self {
        Self::InvalidParameter { name, value }
    }
}
