//! Canonical example inputs.
//!
//! The data sets a host application seeds its forms with: a three-process
//! scheduling example, the classic 20-entry reference string, and the
//! textbook Banker's rows. Handy for demos and used by the engine tests.

use crate::models::{BankerProcess, EdgeKind, NodeKind, Process, ResourceGraph};

/// Default Round Robin time quantum.
pub const DEFAULT_QUANTUM: u32 = 2;

/// Default frame count for page replacement.
pub const DEFAULT_FRAME_COUNT: usize = 3;

/// Three processes with staggered arrivals and mixed priorities.
pub fn processes() -> Vec<Process> {
    vec![
        Process::new("P1", 0, 4).with_priority(2),
        Process::new("P2", 1, 3).with_priority(1),
        Process::new("P3", 2, 1).with_priority(3),
    ]
}

/// The classic 20-entry page reference string.
pub fn reference_string() -> Vec<u32> {
    vec![7, 0, 1, 2, 0, 3, 0, 4, 2, 3, 0, 3, 2, 1, 2, 0, 1, 7, 0, 1]
}

/// Available-resource vector and three process rows for the Banker's
/// check. Note this three-row state is unsafe; it exists to demonstrate
/// the unsafe verdict and partial step transcript.
pub fn banker_state() -> (Vec<u32>, Vec<BankerProcess>) {
    (
        vec![3, 3, 2],
        vec![
            BankerProcess::new("P0", vec![0, 1, 0], vec![7, 5, 3]),
            BankerProcess::new("P1", vec![2, 0, 0], vec![3, 2, 2]),
            BankerProcess::new("P2", vec![3, 0, 2], vec![9, 0, 2]),
        ],
    )
}

/// A four-node allocation graph forming an open chain (no deadlock).
pub fn allocation_graph() -> ResourceGraph {
    ResourceGraph::new()
        .with_node("P1", NodeKind::Process)
        .with_node("P2", NodeKind::Process)
        .with_node("R1", NodeKind::Resource)
        .with_node("R2", NodeKind::Resource)
        .with_edge("P1", "R1", EdgeKind::Request)
        .with_edge("R1", "P2", EdgeKind::Allocation)
        .with_edge("P2", "R2", EdgeKind::Request)
}
