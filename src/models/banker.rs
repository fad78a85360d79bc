//! Input rows for the Banker's safety check.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 8.6.3

use serde::{Deserialize, Serialize};

/// One process row of a Banker's-algorithm state: its current allocation
/// and its declared maximum demand, one entry per resource kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BankerProcess {
    /// Unique process identifier (e.g. `"P0"`).
    pub id: String,
    /// Units currently held, per resource kind.
    pub allocation: Vec<u32>,
    /// Maximum units the process may ever demand, per resource kind.
    pub max: Vec<u32>,
}

impl BankerProcess {
    /// Creates a process row.
    pub fn new(id: impl Into<String>, allocation: Vec<u32>, max: Vec<u32>) -> Self {
        Self {
            id: id.into(),
            allocation,
            max,
        }
    }

    /// Remaining demand per resource kind (`max - allocation`).
    ///
    /// Computed in signed arithmetic: a row whose allocation exceeds its
    /// declared maximum is not rejected, it just yields a negative need and
    /// flows through the safety scan like any other row.
    pub fn need(&self) -> Vec<i64> {
        self.max
            .iter()
            .zip(&self.allocation)
            .map(|(&m, &a)| i64::from(m) - i64::from(a))
            .collect()
    }
}
