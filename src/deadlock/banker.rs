//! Banker's-algorithm safety check.
//!
//! # Algorithm
//!
//! 1. Derive `need = max - allocation` per process.
//! 2. Scan processes in input order; every unfinished process whose need
//!    fits in the working vector finishes and returns its allocation.
//! 3. Repeat full passes until one makes no progress.
//! 4. The state is safe iff every process finished.
//!
//! # Reference
//! Dijkstra (1965), "Cooperating Sequential Processes"; Silberschatz,
//! Galvin & Gagne (2018), "Operating System Concepts", Ch. 8.6.3

use tracing::debug;

use crate::error::{ConfigError, SimResult};
use crate::models::BankerProcess;

use super::SafetyReport;

/// Checks whether the described allocation state is safe.
///
/// `available` defines the resource-kind count; every process's
/// `allocation` and `max` vectors must match its length. The scan order is
/// the input order, so the reported sequence is deterministic.
///
/// An empty process set is vacuously safe with an empty sequence. If the
/// state is unsafe, `sequence` is absent but `steps` still records
/// whatever partial progress occurred.
///
/// # Errors
///
/// [`ConfigError::VectorLengthMismatch`] if any vector disagrees with
/// `available` in length; nothing is computed in that case.
pub fn check_safety(
    available: &[u32],
    processes: &[BankerProcess],
) -> SimResult<SafetyReport> {
    for p in processes {
        if p.allocation.len() != available.len() {
            return Err(ConfigError::VectorLengthMismatch {
                process: p.id.clone(),
                vector: "allocation",
                expected: available.len(),
                found: p.allocation.len(),
            });
        }
        if p.max.len() != available.len() {
            return Err(ConfigError::VectorLengthMismatch {
                process: p.id.clone(),
                vector: "max",
                expected: available.len(),
                found: p.max.len(),
            });
        }
    }
    debug!(
        kinds = available.len(),
        count = processes.len(),
        "banker safety check"
    );

    let mut work: Vec<i64> = available.iter().map(|&v| i64::from(v)).collect();
    let need: Vec<Vec<i64>> = processes.iter().map(BankerProcess::need).collect();
    let mut finished = vec![false; processes.len()];
    let mut sequence = Vec::new();
    let mut steps = Vec::new();

    loop {
        let mut progressed = false;
        for (i, p) in processes.iter().enumerate() {
            if finished[i] {
                continue;
            }
            let fits = need[i].iter().zip(&work).all(|(n, w)| n <= w);
            if !fits {
                continue;
            }
            steps.push(format!("Allocating resources to {}", p.id));
            for (w, &a) in work.iter_mut().zip(&p.allocation) {
                *w += i64::from(a);
            }
            finished[i] = true;
            sequence.push(p.id.clone());
            progressed = true;
            steps.push(format!(
                "Resources available after {}: [{}]",
                p.id,
                format_vector(&work)
            ));
        }
        if !progressed {
            break;
        }
    }

    let safe = finished.iter().all(|&f| f);
    Ok(SafetyReport {
        safe,
        sequence: safe.then_some(sequence),
        steps,
    })
}

fn format_vector(values: &[i64]) -> String {
    values
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    /// The five-process instance from Operating System Concepts, Ch. 8.6.3.
    fn textbook_state() -> (Vec<u32>, Vec<BankerProcess>) {
        (
            vec![3, 3, 2],
            vec![
                BankerProcess::new("P0", vec![0, 1, 0], vec![7, 5, 3]),
                BankerProcess::new("P1", vec![2, 0, 0], vec![3, 2, 2]),
                BankerProcess::new("P2", vec![3, 0, 2], vec![9, 0, 2]),
                BankerProcess::new("P3", vec![2, 1, 1], vec![2, 2, 2]),
                BankerProcess::new("P4", vec![0, 0, 2], vec![4, 3, 3]),
            ],
        )
    }

    #[test]
    fn test_textbook_state_is_safe_starting_with_p1() {
        let (available, processes) = textbook_state();
        let report = check_safety(&available, &processes).unwrap();
        assert!(report.safe);
        let sequence = report.sequence.unwrap();
        assert_eq!(sequence[0], "P1");
        // In-order scanning yields this exact sequence.
        assert_eq!(sequence, vec!["P1", "P3", "P4", "P0", "P2"]);
        // Two step lines per finished process.
        assert_eq!(report.steps.len(), 10);
        assert_eq!(report.steps[0], "Allocating resources to P1");
        assert_eq!(report.steps[1], "Resources available after P1: [5, 3, 2]");
    }

    #[test]
    fn test_three_process_subset_is_unsafe_with_partial_steps() {
        // Only the first three rows of the textbook state: after P1
        // finishes, work = [5, 3, 2] satisfies neither P0's need [7, 4, 3]
        // nor P2's need [6, 0, 0].
        let (available, processes) = textbook_state();
        let report = check_safety(&available, &processes[..3]).unwrap();
        assert!(!report.safe);
        assert!(report.sequence.is_none());
        assert_eq!(
            report.steps,
            vec![
                "Allocating resources to P1",
                "Resources available after P1: [5, 3, 2]",
            ]
        );
    }

    #[test]
    fn test_empty_state_is_vacuously_safe() {
        let report = check_safety(&[1, 2], &[]).unwrap();
        assert!(report.safe);
        assert_eq!(report.sequence, Some(vec![]));
        assert!(report.steps.is_empty());
    }

    #[test]
    fn test_allocation_length_mismatch_rejected() {
        let processes = vec![BankerProcess::new("P0", vec![0, 1], vec![1, 1, 1])];
        let err = check_safety(&[1, 1, 1], &processes).unwrap_err();
        assert_eq!(
            err,
            ConfigError::VectorLengthMismatch {
                process: "P0".into(),
                vector: "allocation",
                expected: 3,
                found: 2,
            }
        );
    }

    #[test]
    fn test_max_length_mismatch_rejected() {
        let processes = vec![BankerProcess::new("P0", vec![0, 0], vec![1])];
        let err = check_safety(&[1, 1], &processes).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::VectorLengthMismatch { vector: "max", .. }
        ));
    }

    #[test]
    fn test_allocation_above_max_is_not_rejected() {
        // Negative need always fits, so the row finishes and its (large)
        // allocation returns to the pool; the scan does not police the
        // allocation/max invariant.
        let processes = vec![
            BankerProcess::new("P0", vec![3], vec![1]),
            BankerProcess::new("P1", vec![0], vec![4]),
        ];
        let report = check_safety(&[1], &processes).unwrap();
        assert!(report.safe);
        assert_eq!(report.sequence, Some(vec!["P0".into(), "P1".into()]));
    }

    #[test]
    fn test_idempotent_runs() {
        let (available, processes) = textbook_state();
        let first = check_safety(&available, &processes).unwrap();
        let second = check_safety(&available, &processes).unwrap();
        assert_eq!(first, second);
    }
}
