//! Resource-allocation graph model.
//!
//! A bipartite graph of process and resource nodes connected by request
//! (process to resource) and allocation (resource to process) edges. A cycle
//! through these edges is a necessary condition for deadlock.
//!
//! # Reference
//! Silberschatz, Galvin & Gagne (2018), "Operating System Concepts", Ch. 8.2

use serde::{Deserialize, Serialize};

/// Whether a node stands for a process or a resource.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NodeKind {
    /// An executing process.
    Process,
    /// A resource instance.
    Resource,
}

/// Edge role within the graph.
///
/// Both kinds participate in cycle formation identically; the distinction
/// exists for rendering and bookkeeping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EdgeKind {
    /// A process waiting for a resource.
    Request,
    /// A resource assigned to a process.
    Allocation,
}

/// A node of the allocation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Caller-supplied node identifier (e.g. `"P1"`, `"R1"`).
    pub id: String,
    /// Node classification.
    pub kind: NodeKind,
}

/// A directed edge of the allocation graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    /// Source node id.
    pub from: String,
    /// Target node id.
    pub to: String,
    /// Edge role.
    pub kind: EdgeKind,
}

/// A resource-allocation graph.
///
/// Node and edge identities are caller-supplied strings. Edge endpoints are
/// not checked against the node set; an edge whose endpoint is undeclared is
/// simply skipped during traversal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceGraph {
    /// Declared nodes.
    pub nodes: Vec<GraphNode>,
    /// Directed edges.
    pub edges: Vec<GraphEdge>,
}

impl ResourceGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a node.
    pub fn with_node(mut self, id: impl Into<String>, kind: NodeKind) -> Self {
        self.nodes.push(GraphNode {
            id: id.into(),
            kind,
        });
        self
    }

    /// Adds a directed edge.
    pub fn with_edge(
        mut self,
        from: impl Into<String>,
        to: impl Into<String>,
        kind: EdgeKind,
    ) -> Self {
        self.edges.push(GraphEdge {
            from: from.into(),
            to: to.into(),
            kind,
        });
        self
    }

    /// Ids of the process nodes, in declaration order.
    pub fn process_ids(&self) -> impl Iterator<Item = &str> {
        self.nodes
            .iter()
            .filter(|n| n.kind == NodeKind::Process)
            .map(|n| n.id.as_str())
    }
}
