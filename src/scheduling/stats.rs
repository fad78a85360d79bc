//! Run statistics for the scheduling engine.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Turnaround time | completion time - arrival time |
//! | Waiting time | turnaround time - burst time |
//!
//! Both averages are taken over the full input process count.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.2

use serde::{Deserialize, Serialize};

/// Averages reported after a scheduling run.
///
/// An empty input yields `0.0` for both fields rather than a NaN.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleStats {
    /// Mean waiting time over all input processes.
    pub average_waiting_time: f64,
    /// Mean turnaround time over all input processes.
    pub average_turnaround_time: f64,
}

/// Accumulates per-process completion figures during a run.
///
/// The divisor is fixed to the original input count up front, so the
/// averages stay correct even if a caller hands the engine a degenerate
/// set where not every process completes before an error is raised.
#[derive(Debug)]
pub(crate) struct StatsAccumulator {
    process_count: usize,
    total_waiting: u64,
    total_turnaround: u64,
}

impl StatsAccumulator {
    pub(crate) fn new(process_count: usize) -> Self {
        Self {
            process_count,
            total_waiting: 0,
            total_turnaround: 0,
        }
    }

    /// Records one completed process given its completion tick.
    pub(crate) fn record(&mut self, completion: u64, arrival: u32, burst: u32) {
        let turnaround = completion - u64::from(arrival);
        self.total_turnaround += turnaround;
        self.total_waiting += turnaround - u64::from(burst);
    }

    pub(crate) fn finish(self) -> ScheduleStats {
        if self.process_count == 0 {
            return ScheduleStats {
                average_waiting_time: 0.0,
                average_turnaround_time: 0.0,
            };
        }
        let count = self.process_count as f64;
        ScheduleStats {
            average_waiting_time: self.total_waiting as f64 / count,
            average_turnaround_time: self.total_turnaround as f64 / count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_averages() {
        let mut acc = StatsAccumulator::new(2);
        acc.record(4, 0, 4); // turnaround 4, waiting 0
        acc.record(7, 1, 3); // turnaround 6, waiting 3
        let stats = acc.finish();
        assert!((stats.average_waiting_time - 1.5).abs() < 1e-10);
        assert!((stats.average_turnaround_time - 5.0).abs() < 1e-10);
    }

    #[test]
    fn test_empty_input_is_zero() {
        let stats = StatsAccumulator::new(0).finish();
        assert_eq!(stats.average_waiting_time, 0.0);
        assert_eq!(stats.average_turnaround_time, 0.0);
    }

    #[test]
    fn test_divisor_is_full_input_count() {
        // Only one of three processes completed.
        let mut acc = StatsAccumulator::new(3);
        acc.record(6, 0, 6);
        let stats = acc.finish();
        assert!((stats.average_turnaround_time - 2.0).abs() < 1e-10);
    }
}
