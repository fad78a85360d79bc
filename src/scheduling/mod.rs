//! CPU scheduling engine.
//!
//! Computes an execution trace (one process id per occupied time unit, the
//! Gantt chart) and waiting/turnaround averages for four classical
//! policies: FCFS, SJF, Round Robin, and Priority.
//!
//! # Usage
//!
//! ```
//! use os_sim::models::Process;
//! use os_sim::scheduling::{self, SchedulingPolicy};
//!
//! let processes = vec![
//!     Process::new("P1", 0, 4).with_priority(2),
//!     Process::new("P2", 1, 3).with_priority(1),
//! ];
//! let run = scheduling::run(&processes, SchedulingPolicy::Fcfs).unwrap();
//! assert_eq!(run.gantt.len(), 7);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2015), "Modern Operating Systems", Ch. 2.4

mod engine;
mod stats;

pub use stats::ScheduleStats;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SimResult;
use crate::models::Process;

/// Scheduling policy selector.
///
/// Serialized with kebab-case tokens (`fcfs`, `sjf`, `round-robin`,
/// `priority`) so the recognized wire names match the variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SchedulingPolicy {
    /// First come, first served: non-preemptive, by arrival time.
    Fcfs,
    /// Shortest job first, preempted every tick, ranked by original burst
    /// time.
    Sjf,
    /// Fixed time slices over a circular queue. `quantum` must be at
    /// least 1.
    RoundRobin {
        /// Units a process may run before being requeued.
        quantum: u32,
    },
    /// Preemptive priority; lower numeric value runs first.
    Priority,
}

/// Trace and statistics from one scheduling run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRun {
    /// Process id holding the CPU during each occupied time unit. Idle
    /// gaps are skipped by the clock and do not appear here, so the length
    /// equals the sum of all burst times.
    pub gantt: Vec<String>,
    /// Waiting/turnaround means over the full input set.
    pub stats: ScheduleStats,
}

/// Runs one scheduling policy over the given processes.
///
/// The input slice is never mutated; per-run working state (remaining
/// burst time, queue order) lives inside the engine and is discarded when
/// the run ends, so repeated calls with the same input produce identical
/// output.
///
/// # Errors
///
/// [`ConfigError::InvalidQuantum`](crate::ConfigError::InvalidQuantum) for
/// a Round Robin quantum of 0, and
/// [`ConfigError::StalledClock`](crate::ConfigError::StalledClock) if a
/// degenerate input keeps the tick loops from ever finishing.
pub fn run(processes: &[Process], policy: SchedulingPolicy) -> SimResult<ScheduleRun> {
    debug!(?policy, count = processes.len(), "scheduling run");
    match policy {
        SchedulingPolicy::Fcfs => Ok(engine::fcfs(processes)),
        SchedulingPolicy::Sjf => engine::shortest_job_first(processes),
        SchedulingPolicy::RoundRobin { quantum } => engine::round_robin(processes, quantum),
        SchedulingPolicy::Priority => engine::priority(processes),
    }
}
