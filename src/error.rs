//! Configuration errors shared by all engines.
//!
//! The engines accept any well-formed numeric input; the only failures are
//! configuration mistakes (a zero quantum, a zero frame count, mismatched
//! resource vectors) and the stall guard on the tick-based schedulers.
//! Each failure class has its own kind so a caller can surface it inline
//! next to the offending form field.

use thiserror::Error;

/// Result alias used by every engine entry point.
pub type SimResult<T> = Result<T, ConfigError>;

/// A configuration error detected before or during a run.
///
/// Engines fail fast with one of these instead of returning a
/// partially-correct trace.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Round Robin needs a time quantum of at least one unit.
    #[error("time quantum must be at least 1")]
    InvalidQuantum,

    /// Page replacement needs at least one frame to fill.
    #[error("frame count must be at least 1")]
    InvalidFrameCount,

    /// The simulated clock passed the bound implied by the input without
    /// every process completing. Only degenerate inputs (e.g. a zero-burst
    /// process the tick loops can never finish) reach this.
    #[error("no runnable process within {limit} ticks")]
    StalledClock {
        /// The clock bound that was exceeded.
        limit: u64,
    },

    /// A Banker's input vector does not match the resource-kind count.
    #[error("process '{process}' {vector} vector has length {found}, expected {expected}")]
    VectorLengthMismatch {
        /// Offending process id.
        process: String,
        /// Which vector mismatched (`"allocation"` or `"max"`).
        vector: &'static str,
        /// Resource-kind count implied by `available`.
        expected: usize,
        /// Length actually supplied.
        found: usize,
    },
}
