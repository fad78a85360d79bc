//! Domain models shared by the engines.
//!
//! Each engine consumes one input family and emits one output family:
//!
//! | Engine | Input | Output cells |
//! |--------|-------|--------------|
//! | scheduling | [`Process`] | trace of process ids |
//! | paging | reference string | [`FrameSlot`] snapshots |
//! | deadlock | [`BankerProcess`], [`ResourceGraph`] | safety report / verdict |
//!
//! All models derive serde so a host application can move them across its
//! own boundaries unchanged.

mod banker;
mod frame;
mod graph;
mod process;

pub use banker::BankerProcess;
pub use frame::{FrameSlot, FrameSnapshot};
pub use graph::{EdgeKind, GraphEdge, GraphNode, NodeKind, ResourceGraph};
pub use process::Process;
