//! Slot Entry Type
//!
//! Every simulator keeps its resident pages in a fixed array of [`Slot`]s. A
//! slot pairs the resident page with a single metric whose meaning depends on
//! the policy:
//!
//! | Policy | `metric` |
//! |--------|----------|
//! | Predictive (blind oracle) | predicted 1-based position of the next use |
//! | Recency (LRU) | 0-based step index of the last access |
//!
//! Slots are plain `Copy` values so a caller can snapshot the whole slot array
//! without sharing it.

use crate::{PageId, Position};
use core::fmt;

/// A resident page together with the eviction metric of its policy.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Slot {
    /// The resident page.
    pub page: PageId,
    /// Predicted next use or last access step, depending on the policy.
    pub metric: Position,
}

impl Slot {
    /// Creates a new slot.
    #[inline]
    pub fn new(page: PageId, metric: Position) -> Self {
        Self { page, metric }
    }
}

impl fmt::Debug for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Slot")
            .field("page", &self.page)
            .field("metric", &self.metric)
            .finish()
    }
}

/// Outcome of presenting one trace step to a simulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Access {
    /// The page was resident.
    Hit,
    /// The page was not resident and had to be loaded.
    Fault,
}

impl Access {
    /// Returns `true` for [`Access::Fault`].
    #[inline]
    pub fn is_fault(self) -> bool {
        matches!(self, Access::Fault)
    }

    /// Returns `true` for [`Access::Hit`].
    #[inline]
    pub fn is_hit(self) -> bool {
        matches!(self, Access::Hit)
    }
}
