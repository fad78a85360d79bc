//! Frame cells emitted by the page replacement engine.

use serde::{Deserialize, Serialize};

/// One physical frame slot as it appears in a snapshot.
///
/// Flags describe the last event that touched this slot; they carry over
/// from snapshot to snapshot until the slot is touched again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameSlot {
    /// Resident page, or `None` while the slot is still empty.
    pub page: Option<u32>,
    /// The slot's page was re-referenced while resident.
    pub is_hit: bool,
    /// The slot was filled or replaced on a fault.
    pub is_new: bool,
}

impl FrameSlot {
    /// An empty slot with no flags set.
    pub fn empty() -> Self {
        Self {
            page: None,
            is_hit: false,
            is_new: false,
        }
    }

    /// Whether the slot holds no page yet.
    pub fn is_empty(&self) -> bool {
        self.page.is_none()
    }
}

/// Frame contents captured after processing one reference.
pub type FrameSnapshot = Vec<FrameSlot>;
