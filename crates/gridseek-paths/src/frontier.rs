//! Open sets for A*.
//!
//! Selection rule shared by every implementation: the entry with the lowest
//! `f = g + h` wins, and among equal `f` the entry whose slot was created
//! first wins. Replacing an entry with a cheaper one keeps its slot.

use std::collections::BinaryHeap;

use gridseek_core::{Bounds, Cell};

/// A cell under consideration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Entry {
    pub(crate) cell: Cell,
    /// Steps from the start.
    pub(crate) g: i32,
    /// Estimated steps to the goal.
    pub(crate) h: i32,
    pub(crate) from: Option<Cell>,
}

impl Entry {
    #[inline]
    pub(crate) fn f(&self) -> i32 {
        self.g + self.h
    }
}

/// What [`OpenSet::offer`] did with a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Offer {
    Added,
    Replaced,
    Kept,
}

pub(crate) trait OpenSet {
    /// Add `entry`, or replace the existing entry for the same cell if that
    /// one has a strictly larger `f`.
    fn offer(&mut self, entry: Entry) -> Offer;

    /// Remove and return the best entry.
    fn pop_best(&mut self) -> Option<Entry>;

    fn len(&self) -> usize;
}

// ---------------------------------------------------------------------------
// Linear scan
// ---------------------------------------------------------------------------

/// Entries kept in slot order; selection scans for the first minimum.
#[derive(Debug, Default)]
pub(crate) struct ScanFrontier {
    entries: Vec<Entry>,
}

impl ScanFrontier {
    pub(crate) fn new() -> Self {
        Self::default()
    }
}

impl OpenSet for ScanFrontier {
    fn offer(&mut self, entry: Entry) -> Offer {
        match self.entries.iter().position(|e| e.cell == entry.cell) {
            None => {
                self.entries.push(entry);
                Offer::Added
            }
            Some(i) if self.entries[i].f() > entry.f() => {
                self.entries[i] = entry;
                Offer::Replaced
            }
            Some(_) => Offer::Kept,
        }
    }

    fn pop_best(&mut self) -> Option<Entry> {
        let mut best = 0;
        for (i, e) in self.entries.iter().enumerate().skip(1) {
            if e.f() < self.entries[best].f() {
                best = i;
            }
        }
        if best >= self.entries.len() {
            return None;
        }
        // `remove` keeps the remaining slots in order.
        Some(self.entries.remove(best))
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}

// ---------------------------------------------------------------------------
// Binary heap
// ---------------------------------------------------------------------------

/// Heap key ordered by `(f, seq)` ascending. `idx` is payload only.
#[derive(Clone, Copy, Debug)]
struct HeapKey {
    f: i32,
    seq: u64,
    idx: usize,
}

impl Ord for HeapKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest (f, seq) first.
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialEq for HeapKey {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == std::cmp::Ordering::Equal
    }
}

impl Eq for HeapKey {}

impl PartialOrd for HeapKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

#[derive(Debug, Clone, Copy)]
struct Slot {
    entry: Entry,
    seq: u64,
}

/// Heap-backed open set with a per-cell slot table.
///
/// Replacement pushes a second key carrying the slot's first sequence
/// number; the superseded key is recognised as stale on pop because its `f`
/// no longer matches the slot.
pub(crate) struct HeapFrontier {
    bounds: Bounds,
    slots: Vec<Option<Slot>>,
    heap: BinaryHeap<HeapKey>,
    next_seq: u64,
    live: usize,
}

impl HeapFrontier {
    pub(crate) fn new(bounds: Bounds) -> Self {
        Self {
            bounds,
            slots: vec![None; bounds.len()],
            heap: BinaryHeap::new(),
            next_seq: 0,
            live: 0,
        }
    }
}

impl OpenSet for HeapFrontier {
    fn offer(&mut self, entry: Entry) -> Offer {
        let Some(idx) = self.bounds.index(entry.cell) else {
            return Offer::Kept;
        };
        if let Some(slot) = &mut self.slots[idx] {
            if slot.entry.f() <= entry.f() {
                return Offer::Kept;
            }
            slot.entry = entry;
            let seq = slot.seq;
            self.heap.push(HeapKey {
                f: entry.f(),
                seq,
                idx,
            });
            return Offer::Replaced;
        }

        let seq = self.next_seq;
        self.next_seq += 1;
        self.slots[idx] = Some(Slot { entry, seq });
        self.heap.push(HeapKey {
            f: entry.f(),
            seq,
            idx,
        });
        self.live += 1;
        Offer::Added
    }

    fn pop_best(&mut self) -> Option<Entry> {
        while let Some(key) = self.heap.pop() {
            match self.slots[key.idx] {
                Some(slot) if slot.entry.f() == key.f => {
                    self.slots[key.idx] = None;
                    self.live -= 1;
                    return Some(slot.entry);
                }
                // Stale key.
                _ => continue,
            }
        }
        None
    }

    fn len(&self) -> usize {
        self.live
    }
}
