//! Error types for the simulation crate
//!
//! Two failure classes exist:
//! - degenerate numeric state found while resolving a frame (`DivisionByZero`),
//! - bad setup values caught before the first frame runs (`InvalidConfiguration`)
//!
//! Neither is recovered internally; both propagate to the caller.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    /// Normalizing a zero-magnitude vector. Reachable when two sphere
    /// centers become exactly coincident; the kernel does not pick a
    /// fallback separation axis.
    #[error("division by zero: cannot normalize a zero-magnitude vector")]
    DivisionByZero,

    /// A setup value that must be strictly positive was not.
    #[error("invalid configuration: {field} must be positive, got {value}")]
    InvalidConfiguration { field: &'static str, value: f64 },
}

/// Result type for simulation operations
pub type SimResult<T> = Result<T, SimError>;
