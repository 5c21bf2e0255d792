//! Fixed-capacity slot storage.
//!
//! A `SlotTable` is a plain vector of [`Slot`]s that never grows past its
//! capacity. Membership, minimum and maximum lookups are linear scans in slot
//! order, which gives the first-index tie-break every policy relies on.

extern crate alloc;

use crate::entry::Slot;
use crate::{PageId, Position};
use alloc::vec::Vec;
use core::num::NonZeroUsize;

#[derive(Debug, Clone)]
pub(crate) struct SlotTable {
    slots: Vec<Slot>,
    cap: NonZeroUsize,
}

impl SlotTable {
    pub(crate) fn new(cap: NonZeroUsize) -> Self {
        SlotTable {
            slots: Vec::with_capacity(cap.get()),
            cap,
        }
    }

    #[inline]
    pub(crate) fn cap(&self) -> NonZeroUsize {
        self.cap
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    pub(crate) fn is_full(&self) -> bool {
        self.slots.len() >= self.cap.get()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[Slot] {
        &self.slots
    }

    /// Appends a slot during warm-up. The page is not checked for residency.
    pub(crate) fn push(&mut self, page: PageId, metric: Position) {
        debug_assert!(!self.is_full(), "push into a full slot table");
        self.slots.push(Slot::new(page, metric));
    }

    /// Index of the first slot holding `page`.
    pub(crate) fn find(&self, page: PageId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.page == page)
    }

    pub(crate) fn set_metric(&mut self, index: usize, metric: Position) {
        self.slots[index].metric = metric;
    }

    /// Overwrites the slot at `index`, returning the evicted slot.
    pub(crate) fn replace(&mut self, index: usize, page: PageId, metric: Position) -> Slot {
        core::mem::replace(&mut self.slots[index], Slot::new(page, metric))
    }

    /// Index of the first slot with the largest metric.
    pub(crate) fn max_metric_index(&self) -> Option<usize> {
        let mut best: Option<(usize, Position)> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            match best {
                Some((_, metric)) if slot.metric <= metric => {}
                _ => best = Some((index, slot.metric)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Index of the first slot with the smallest metric.
    pub(crate) fn min_metric_index(&self) -> Option<usize> {
        let mut best: Option<(usize, Position)> = None;
        for (index, slot) in self.slots.iter().enumerate() {
            match best {
                Some((_, metric)) if slot.metric >= metric => {}
                _ => best = Some((index, slot.metric)),
            }
        }
        best.map(|(index, _)| index)
    }

    /// Copies the resident pages, in slot order, into `out`.
    pub(crate) fn copy_pages_into(&self, out: &mut Vec<PageId>) {
        out.clear();
        out.extend(self.slots.iter().map(|slot| slot.page));
    }
}
