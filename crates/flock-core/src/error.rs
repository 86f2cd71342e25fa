//! Construction-time validation errors.
//!
//! Every `flock-*` crate that validates input reports through `ConfigError`;
//! `flock-sim` wraps it as one variant of `SimError`.  Once a simulation is
//! built, no per-tick operation returns a `ConfigError`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    #[error("agent count must be at least 1")]
    EmptyPopulation,

    #[error("class count must be at least 1")]
    NoClasses,

    #[error("class count {0} exceeds the supported maximum of {max}", max = u16::MAX)]
    TooManyClasses(usize),

    #[error("{what} range is inverted: min {min} > max {max}")]
    InvertedRange {
        what: &'static str,
        min:  f64,
        max:  f64,
    },

    #[error("{what} range must not go below zero, got min {min}")]
    NegativeMagnitude { what: &'static str, min: f64 },

    #[error("{what} must be positive, got {value}")]
    NonPositive { what: &'static str, value: f64 },

    #[error("{what} must be finite")]
    NonFinite { what: &'static str },

    #[error("coefficient table must be {expected}×{expected}, got {rows} rows (row {row} has {cols} columns)")]
    TableShape {
        expected: usize,
        rows:     usize,
        row:      usize,
        cols:     usize,
    },

    #[error("coefficient table has {got} wall weights, expected {expected}")]
    WallWeightCount { expected: usize, got: usize },

    #[error("non-finite weight for class pair ({own}, {other})")]
    NonFiniteWeight { own: usize, other: usize },
}

/// Shorthand result type for validation.
pub type ConfigResult<T> = Result<T, ConfigError>;
