//! Tick-level implementations of the scheduling policies.
//!
//! All four policies share the same contract: consume the input by
//! reference, drive a discrete clock, and emit one trace entry per executed
//! time unit. Working state (remaining burst time, queue order) is created
//! fresh per run and discarded afterwards, so the caller's slice is never
//! touched.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 5.3

use std::collections::VecDeque;
use std::iter;

use crate::error::{ConfigError, SimResult};
use crate::models::Process;

use super::stats::StatsAccumulator;
use super::ScheduleRun;

/// Per-run working copy of one process.
struct Workload<'a> {
    process: &'a Process,
    remaining: u32,
}

impl<'a> Workload<'a> {
    fn take_all(processes: &'a [Process]) -> Vec<Workload<'a>> {
        processes
            .iter()
            .map(|p| Workload {
                process: p,
                remaining: p.burst_time,
            })
            .collect()
    }
}

/// Upper bound on the simulated clock.
///
/// Once every arrival has passed and every burst unit has executed, the
/// clock cannot legitimately advance further; passing this bound means the
/// run is stalled on input it can never finish.
fn tick_limit(processes: &[Process]) -> u64 {
    let max_arrival = processes
        .iter()
        .map(|p| u64::from(p.arrival_time))
        .max()
        .unwrap_or(0);
    let total_burst: u64 = processes.iter().map(|p| u64::from(p.burst_time)).sum();
    max_arrival + total_burst + 1
}

/// First come, first served.
///
/// Non-preemptive: processes run to completion in arrival order, ties broken
/// by input order (stable sort). Idle gaps before a late arrival are skipped
/// by the clock and do not appear in the trace.
pub(super) fn fcfs(processes: &[Process]) -> ScheduleRun {
    let mut order: Vec<&Process> = processes.iter().collect();
    order.sort_by_key(|p| p.arrival_time);

    let mut clock: u64 = 0;
    let mut gantt = Vec::new();
    let mut stats = StatsAccumulator::new(processes.len());

    for process in order {
        clock = clock.max(u64::from(process.arrival_time));
        gantt.extend(iter::repeat(process.id.clone()).take(process.burst_time as usize));
        clock += u64::from(process.burst_time);
        stats.record(clock, process.arrival_time, process.burst_time);
    }

    ScheduleRun {
        gantt,
        stats: stats.finish(),
    }
}

/// Shortest job first, preempted every tick.
///
/// Ranks runnable processes by their *original* burst time, not the time
/// remaining, so a long job that is nearly done still loses to a short
/// newcomer. Whether that should instead be shortest-remaining-time-first
/// is an open question recorded in DESIGN.md; this is the defined behavior.
pub(super) fn shortest_job_first(processes: &[Process]) -> SimResult<ScheduleRun> {
    tick_driven(processes, |p| i64::from(p.burst_time))
}

/// Preemptive priority scheduling; lower numeric value runs first.
pub(super) fn priority(processes: &[Process]) -> SimResult<ScheduleRun> {
    tick_driven(processes, |p| i64::from(p.priority))
}

/// Shared preemptive tick loop for SJF and Priority.
///
/// Every tick the lowest-ranked runnable process executes one unit. Ties
/// keep the earliest candidate in the current working order (strict-less
/// scan). A tick with no runnable process advances the clock without
/// emitting a trace entry, up to [`tick_limit`].
fn tick_driven(
    processes: &[Process],
    rank: impl Fn(&Process) -> i64,
) -> SimResult<ScheduleRun> {
    let mut pending = Workload::take_all(processes);
    let limit = tick_limit(processes);
    let mut clock: u64 = 0;
    let mut gantt = Vec::new();
    let mut stats = StatsAccumulator::new(processes.len());

    while !pending.is_empty() {
        if clock > limit {
            return Err(ConfigError::StalledClock { limit });
        }

        let mut selected: Option<usize> = None;
        for (i, w) in pending.iter().enumerate() {
            if u64::from(w.process.arrival_time) > clock || w.remaining == 0 {
                continue;
            }
            match selected {
                Some(best) if rank(w.process) >= rank(pending[best].process) => {}
                _ => selected = Some(i),
            }
        }

        match selected {
            Some(i) => {
                gantt.push(pending[i].process.id.clone());
                clock += 1;
                pending[i].remaining -= 1;
                if pending[i].remaining == 0 {
                    let done = pending.remove(i);
                    stats.record(clock, done.process.arrival_time, done.process.burst_time);
                }
            }
            None => clock += 1,
        }
    }

    Ok(ScheduleRun {
        gantt,
        stats: stats.finish(),
    })
}

/// Round Robin over a circular queue seeded in input order.
///
/// A front process whose arrival is still in the future is requeued at the
/// back while the clock advances one unit (busy-wait semantics: this can
/// reorder service relative to arrival, and that is the defined behavior).
/// An arrived process runs for `min(quantum, remaining)` units, then is
/// requeued if unfinished.
pub(super) fn round_robin(processes: &[Process], quantum: u32) -> SimResult<ScheduleRun> {
    if quantum == 0 {
        return Err(ConfigError::InvalidQuantum);
    }

    let mut queue: VecDeque<Workload<'_>> = Workload::take_all(processes).into();
    let limit = tick_limit(processes);
    let mut clock: u64 = 0;
    let mut gantt = Vec::new();
    let mut stats = StatsAccumulator::new(processes.len());

    while let Some(mut front) = queue.pop_front() {
        if clock > limit {
            return Err(ConfigError::StalledClock { limit });
        }

        if u64::from(front.process.arrival_time) > clock {
            queue.push_back(front);
            clock += 1;
            continue;
        }

        let slice = quantum.min(front.remaining);
        gantt.extend(iter::repeat(front.process.id.clone()).take(slice as usize));
        clock += u64::from(slice);
        front.remaining -= slice;

        if front.remaining > 0 {
            queue.push_back(front);
        } else {
            stats.record(clock, front.process.arrival_time, front.process.burst_time);
        }
    }

    Ok(ScheduleRun {
        gantt,
        stats: stats.finish(),
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;
    use crate::scheduling::{run, SchedulingPolicy};

    /// The three-process example set: id, arrival, burst, priority.
    fn sample_processes() -> Vec<Process> {
        vec![
            Process::new("P1", 0, 4).with_priority(2),
            Process::new("P2", 1, 3).with_priority(1),
            Process::new("P3", 2, 1).with_priority(3),
        ]
    }

    fn id_counts(gantt: &[String]) -> HashMap<&str, u32> {
        let mut counts = HashMap::new();
        for id in gantt {
            *counts.entry(id.as_str()).or_insert(0) += 1;
        }
        counts
    }

    #[test]
    fn test_fcfs_sample() {
        let run = fcfs(&sample_processes());
        assert_eq!(
            run.gantt,
            vec!["P1", "P1", "P1", "P1", "P2", "P2", "P2", "P3"]
        );
        // Waiting: P1=0, P2=3, P3=5. Turnaround: P1=4, P2=6, P3=6.
        assert!((run.stats.average_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((run.stats.average_turnaround_time - 16.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_fcfs_equal_arrivals_keep_input_order() {
        let processes = vec![
            Process::new("first", 1, 2),
            Process::new("second", 1, 2),
        ];
        let run = fcfs(&processes);
        assert_eq!(run.gantt, vec!["first", "first", "second", "second"]);
    }

    #[test]
    fn test_fcfs_idle_gap_not_traced() {
        let processes = vec![Process::new("P1", 5, 2)];
        let run = fcfs(&processes);
        assert_eq!(run.gantt.len(), 2);
        // Clock jumped to the arrival: no waiting, turnaround = burst.
        assert_eq!(run.stats.average_waiting_time, 0.0);
        assert_eq!(run.stats.average_turnaround_time, 2.0);
    }

    #[test]
    fn test_sjf_sample() {
        let run = shortest_job_first(&sample_processes()).unwrap();
        assert_eq!(
            run.gantt,
            vec!["P1", "P2", "P3", "P2", "P2", "P1", "P1", "P1"]
        );
        // Waiting: P3=0, P2=1, P1=4. Turnaround: P3=1, P2=4, P1=8.
        assert!((run.stats.average_waiting_time - 5.0 / 3.0).abs() < 1e-10);
        assert!((run.stats.average_turnaround_time - 13.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_sjf_ranks_by_original_burst_not_remaining() {
        // A(burst 4) has 1 unit left when B(burst 3) arrives; B still wins
        // because 3 < 4 on the original burst key.
        let processes = vec![Process::new("A", 0, 4), Process::new("B", 3, 3)];
        let run = shortest_job_first(&processes).unwrap();
        assert_eq!(run.gantt, vec!["A", "A", "A", "B", "B", "B", "A"]);
    }

    #[test]
    fn test_sjf_tie_keeps_first_in_working_order() {
        let processes = vec![Process::new("A", 0, 2), Process::new("B", 0, 2)];
        let run = shortest_job_first(&processes).unwrap();
        assert_eq!(run.gantt, vec!["A", "A", "B", "B"]);
    }

    #[test]
    fn test_sjf_clock_advances_over_empty_ticks() {
        let processes = vec![Process::new("P1", 3, 2)];
        let run = shortest_job_first(&processes).unwrap();
        assert_eq!(run.gantt, vec!["P1", "P1"]);
        assert_eq!(run.stats.average_waiting_time, 0.0);
        assert_eq!(run.stats.average_turnaround_time, 2.0);
    }

    #[test]
    fn test_round_robin_sample() {
        let run = round_robin(&sample_processes(), 2).unwrap();
        assert_eq!(
            run.gantt,
            vec!["P1", "P1", "P2", "P2", "P3", "P1", "P1", "P2"]
        );
        // Waiting: P3=2, P1=3, P2=4. Turnaround: P3=3, P1=7, P2=7.
        assert!((run.stats.average_waiting_time - 3.0).abs() < 1e-10);
        assert!((run.stats.average_turnaround_time - 17.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_round_robin_busy_waits_on_future_arrival() {
        // P1 heads the queue but has not arrived: one idle tick passes,
        // then P2 (arrived at 0) runs before it.
        let processes = vec![Process::new("P1", 2, 1), Process::new("P2", 0, 1)];
        let run = round_robin(&processes, 1).unwrap();
        assert_eq!(run.gantt, vec!["P2", "P1"]);
    }

    #[test]
    fn test_round_robin_rejects_zero_quantum() {
        let err = round_robin(&sample_processes(), 0).unwrap_err();
        assert_eq!(err, ConfigError::InvalidQuantum);
    }

    #[test]
    fn test_priority_sample() {
        let run = priority(&sample_processes()).unwrap();
        assert_eq!(
            run.gantt,
            vec!["P1", "P2", "P2", "P2", "P1", "P1", "P1", "P3"]
        );
        // Waiting: P2=0, P1=3, P3=5. Turnaround: P2=3, P1=7, P3=6.
        assert!((run.stats.average_waiting_time - 8.0 / 3.0).abs() < 1e-10);
        assert!((run.stats.average_turnaround_time - 16.0 / 3.0).abs() < 1e-10);
    }

    #[test]
    fn test_work_conservation_all_policies() {
        let processes = sample_processes();
        let policies = [
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::Sjf,
            SchedulingPolicy::RoundRobin { quantum: 2 },
            SchedulingPolicy::Priority,
        ];
        for policy in policies {
            let result = run(&processes, policy).unwrap();
            let counts = id_counts(&result.gantt);
            for p in &processes {
                assert_eq!(
                    counts.get(p.id.as_str()).copied().unwrap_or(0),
                    p.burst_time,
                    "{policy:?} lost work for {}",
                    p.id
                );
            }
            assert_eq!(result.gantt.len(), 8);
        }
    }

    #[test]
    fn test_input_not_mutated() {
        let processes = sample_processes();
        let before = processes.clone();
        let _ = run(&processes, SchedulingPolicy::Sjf).unwrap();
        let _ = run(&processes, SchedulingPolicy::RoundRobin { quantum: 1 }).unwrap();
        assert_eq!(processes, before);
    }

    #[test]
    fn test_empty_input() {
        let policies = [
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::Sjf,
            SchedulingPolicy::RoundRobin { quantum: 2 },
            SchedulingPolicy::Priority,
        ];
        for policy in policies {
            let result = run(&[], policy).unwrap();
            assert!(result.gantt.is_empty());
            assert_eq!(result.stats.average_waiting_time, 0.0);
            assert_eq!(result.stats.average_turnaround_time, 0.0);
        }
    }

    #[test]
    fn test_zero_burst_process_stalls_tick_loop() {
        // A zero-burst process is never runnable and never completes; the
        // tick loop must stop at the clock bound instead of spinning.
        let processes = vec![Process::new("P1", 0, 2), Process::new("zero", 0, 0)];
        let err = shortest_job_first(&processes).unwrap_err();
        assert!(matches!(err, ConfigError::StalledClock { .. }));
    }

    #[test]
    fn test_idempotent_runs() {
        let processes = sample_processes();
        for policy in [
            SchedulingPolicy::Fcfs,
            SchedulingPolicy::Sjf,
            SchedulingPolicy::RoundRobin { quantum: 2 },
            SchedulingPolicy::Priority,
        ] {
            let first = run(&processes, policy).unwrap();
            let second = run(&processes, policy).unwrap();
            assert_eq!(first, second);
        }
    }
}
