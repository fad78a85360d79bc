//! Cycle detection over the resource-allocation graph.
//!
//! # Algorithm
//!
//! Depth-first search started from every process node, with a visited set
//! shared across starts and an on-path set owned per start. An edge back
//! into the current path is a cycle. The search uses an explicit frame
//! stack rather than recursion, so pathological graphs cannot overflow the
//! call stack.
//!
//! # Reference
//! Cormen et al. (2009), "Introduction to Algorithms", Ch. 22.3;
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 8.2

use std::collections::{HashMap, HashSet};

use tracing::debug;

use crate::models::{NodeKind, ResourceGraph};

/// Reports whether the graph contains a cycle reachable from a process
/// node.
///
/// Request and allocation edges are followed identically in their stored
/// direction. Edges with an undeclared endpoint are skipped, not errors.
///
/// A cycle is a *necessary* deadlock condition; it is sufficient only when
/// every resource has a single instance. This check reports any cycle as
/// deadlock and leaves the multi-instance refinement to the caller.
pub fn detect_cycle(graph: &ResourceGraph) -> bool {
    let declared: HashSet<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();

    let mut adjacency: HashMap<&str, Vec<&str>> = HashMap::new();
    for edge in &graph.edges {
        if declared.contains(edge.from.as_str()) && declared.contains(edge.to.as_str()) {
            adjacency
                .entry(edge.from.as_str())
                .or_default()
                .push(edge.to.as_str());
        }
    }
    debug!(
        nodes = graph.nodes.len(),
        edges = graph.edges.len(),
        "cycle detection"
    );

    let mut visited: HashSet<&str> = HashSet::new();
    for node in &graph.nodes {
        if node.kind != NodeKind::Process || visited.contains(node.id.as_str()) {
            continue;
        }
        if walk_finds_cycle(node.id.as_str(), &adjacency, &mut visited) {
            return true;
        }
    }
    false
}

/// Iterative DFS from `start`; each stack frame holds a node and the index
/// of the next outgoing edge to try.
fn walk_finds_cycle<'a>(
    start: &'a str,
    adjacency: &HashMap<&'a str, Vec<&'a str>>,
    visited: &mut HashSet<&'a str>,
) -> bool {
    let mut on_path: HashSet<&str> = HashSet::new();
    let mut stack: Vec<(&str, usize)> = vec![(start, 0)];
    visited.insert(start);
    on_path.insert(start);

    while let Some(frame) = stack.last_mut() {
        let (node, edge_index) = *frame;
        frame.1 += 1;

        let targets = adjacency
            .get(node)
            .map(Vec::as_slice)
            .unwrap_or_default();

        if edge_index >= targets.len() {
            on_path.remove(node);
            stack.pop();
            continue;
        }

        let target = targets[edge_index];
        if on_path.contains(target) {
            return true;
        }
        if visited.insert(target) {
            on_path.insert(target);
            stack.push((target, 0));
        }
    }
    false
}
