//! Deadlock analysis engine.
//!
//! Two independent checks over caller-supplied state:
//!
//! - [`check_safety`]: Banker's-algorithm safety verdict with the safe
//!   sequence and a human-readable step transcript.
//! - [`detect_cycle`]: cycle detection over a resource-allocation graph.
//!
//! # Usage
//!
//! ```
//! use os_sim::deadlock;
//! use os_sim::models::BankerProcess;
//!
//! let available = [1, 1];
//! let processes = [BankerProcess::new("P0", vec![0, 0], vec![1, 1])];
//! let report = deadlock::check_safety(&available, &processes).unwrap();
//! assert!(report.safe);
//! assert_eq!(report.sequence.unwrap(), vec!["P0"]);
//! ```
//!
//! # References
//!
//! - Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 8
//! - Dijkstra (1965), "Cooperating Sequential Processes"

mod banker;
mod cycle;

pub use banker::check_safety;
pub use cycle::detect_cycle;

use serde::{Deserialize, Serialize};

/// Verdict of the Banker's safety check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SafetyReport {
    /// Whether every process can run to completion from this state.
    pub safe: bool,
    /// Completion order found by the scan; present only when safe.
    pub sequence: Option<Vec<String>>,
    /// Human-readable trace of the scan, including partial progress on an
    /// unsafe state.
    pub steps: Vec<String>,
}
