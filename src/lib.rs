//! Deterministic simulation engines for classical operating-system
//! algorithms.
//!
//! Given small user-supplied inputs, each engine computes a step-by-step
//! execution trace and summary statistics:
//!
//! - **[`scheduling`]**: FCFS, SJF, Round Robin, and Priority CPU
//!   scheduling, producing a Gantt trace and waiting/turnaround averages
//! - **[`paging`]**: FIFO, LRU, and Optimal page replacement, producing
//!   per-reference frame snapshots and hit/fault totals
//! - **[`deadlock`]**: Banker's-algorithm safety check and
//!   resource-allocation-graph cycle detection
//!
//! # Architecture
//!
//! The three engines are independent leaves: pure functions from borrowed
//! input to an owned trace/summary container, with no shared state and no
//! dependency on each other. The simulated clock is a discrete counter,
//! not wall time, so identical inputs always produce identical output and
//! concurrent runs need no coordination. Configuration mistakes fail fast
//! with a [`ConfigError`] instead of a partial trace; the [`validation`]
//! module offers advisory pre-flight checks for form-style callers.
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts",
//!   Ch. 5, 8, 10
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2-3
//! - Belady (1966), "A study of replacement algorithms for virtual-storage
//!   computers"

pub mod deadlock;
mod error;
pub mod models;
pub mod paging;
pub mod samples;
pub mod scheduling;
pub mod validation;

pub use error::{ConfigError, SimResult};
