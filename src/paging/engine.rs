//! Frame-table implementations of the replacement policies.
//!
//! Physical slots are stable: a page keeps its slot until evicted, and a
//! replacement puts the incoming page in the victim's slot. Residency
//! *order* (insertion order for FIFO, recency order for LRU) is bookkept
//! separately, so a snapshot only ever changes the one slot the current
//! reference touched.
//!
//! # Reference
//! Belady (1966), "A study of replacement algorithms for virtual-storage
//! computers"

use std::collections::VecDeque;

use crate::models::{FrameSlot, FrameSnapshot};

use super::{PagingRun, PagingStats};

/// Working frame state shared by the three policies.
struct FrameTable {
    slots: Vec<FrameSlot>,
    /// Front = next eviction candidate. Insertion order under FIFO,
    /// recency order under LRU; unused for victim choice under Optimal.
    order: VecDeque<u32>,
    snapshots: Vec<FrameSnapshot>,
    hits: usize,
}

impl FrameTable {
    fn new(frame_count: usize) -> Self {
        let slots = vec![FrameSlot::empty(); frame_count];
        Self {
            snapshots: vec![slots.clone()],
            slots,
            order: VecDeque::new(),
            hits: 0,
        }
    }

    fn slot_of(&self, page: u32) -> Option<usize> {
        self.slots.iter().position(|s| s.page == Some(page))
    }

    fn first_free(&self) -> Option<usize> {
        self.slots.iter().position(|s| s.page.is_none())
    }

    fn record_hit(&mut self, slot: usize) {
        self.hits += 1;
        self.slots[slot].is_hit = true;
        self.slots[slot].is_new = false;
    }

    /// Loads `page` into `slot` as a fault fill and appends it to the
    /// residency order.
    fn load(&mut self, slot: usize, page: u32) {
        self.slots[slot] = FrameSlot {
            page: Some(page),
            is_hit: false,
            is_new: true,
        };
        self.order.push_back(page);
    }

    /// Captures the state after one reference. Untouched slots keep the
    /// flags they carried in the previous snapshot.
    fn snapshot(&mut self) {
        self.snapshots.push(self.slots.clone());
    }

    /// Evicts the front of the residency order and loads `page` into the
    /// victim's slot. No-op when the order is empty (zero frames).
    fn replace_front(&mut self, page: u32) {
        if let Some(victim) = self.order.pop_front() {
            if let Some(slot) = self.slot_of(victim) {
                self.load(slot, page);
            }
        }
    }

    /// Victim slot under Belady's rule: scan slots in order; a resident
    /// page absent from the remaining references wins immediately,
    /// otherwise take the page whose next use lies furthest ahead (distance
    /// ties keep the first slot scanned).
    fn furthest_use_slot(&self, remaining: &[u32]) -> usize {
        let mut victim = 0;
        let mut furthest: Option<usize> = None;
        for (idx, slot) in self.slots.iter().enumerate() {
            let Some(page) = slot.page else { continue };
            match remaining.iter().position(|&r| r == page) {
                None => return idx,
                Some(next) if furthest.map_or(true, |f| next > f) => {
                    furthest = Some(next);
                    victim = idx;
                }
                Some(_) => {}
            }
        }
        victim
    }

    fn into_run(self, reference_count: usize) -> PagingRun {
        PagingRun {
            stats: PagingStats {
                hits: self.hits,
                faults: reference_count - self.hits,
            },
            snapshots: self.snapshots,
        }
    }
}

/// First-in, first-out: hits leave the residency order unchanged
/// (no promotion); eviction removes the oldest-inserted page.
pub(super) fn fifo(references: &[u32], frame_count: usize) -> PagingRun {
    let mut table = FrameTable::new(frame_count);
    for &page in references {
        if let Some(slot) = table.slot_of(page) {
            table.record_hit(slot);
        } else if let Some(free) = table.first_free() {
            table.load(free, page);
        } else {
            table.replace_front(page);
        }
        table.snapshot();
    }
    table.into_run(references.len())
}

/// Least recently used: a hit moves the page to the most-recently-used end
/// of the order, so eviction always removes the recency-oldest page.
pub(super) fn lru(references: &[u32], frame_count: usize) -> PagingRun {
    let mut table = FrameTable::new(frame_count);
    for &page in references {
        if let Some(slot) = table.slot_of(page) {
            table.record_hit(slot);
            table.order.retain(|&p| p != page);
            table.order.push_back(page);
        } else if let Some(free) = table.first_free() {
            table.load(free, page);
        } else {
            table.replace_front(page);
        }
        table.snapshot();
    }
    table.into_run(references.len())
}

/// Belady's optimal replacement: on a full miss, evict the resident page
/// referenced furthest in the future, or one never referenced again.
pub(super) fn optimal(references: &[u32], frame_count: usize) -> PagingRun {
    let mut table = FrameTable::new(frame_count);
    for (i, &page) in references.iter().enumerate() {
        if let Some(slot) = table.slot_of(page) {
            table.record_hit(slot);
        } else if let Some(free) = table.first_free() {
            table.load(free, page);
        } else {
            let slot = table.furthest_use_slot(&references[i + 1..]);
            if let Some(old) = table.slots[slot].page {
                table.order.retain(|&p| p != old);
            }
            table.load(slot, page);
        }
        table.snapshot();
    }
    table.into_run(references.len())
}
