//! Process model for the scheduling engine.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 3.1

use serde::{Deserialize, Serialize};

/// A process competing for the CPU.
///
/// All times are in abstract simulation units; the clock is a discrete
/// counter, not wall time. Identity is `id`; ids should be unique within
/// one input set, but the engines do not enforce that (see the
/// [`validation`](crate::validation) module for the advisory check).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (e.g. `"P1"`).
    pub id: String,
    /// Tick at which the process becomes runnable.
    pub arrival_time: u32,
    /// Total CPU time the process requires. Must be at least 1.
    pub burst_time: u32,
    /// Scheduling priority; lower values run first.
    pub priority: i32,
}

impl Process {
    /// Creates a process with the given id and timing, priority 0.
    pub fn new(id: impl Into<String>, arrival_time: u32, burst_time: u32) -> Self {
        Self {
            id: id.into(),
            arrival_time,
            burst_time,
            priority: 0,
        }
    }

    /// Sets the scheduling priority (lower = more urgent).
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = priority;
        self
    }
}
