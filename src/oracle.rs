//! Exact Next-Use Annotation
//!
//! For every position of a trace, records the 1-based position of the next
//! access to the same page, or `n + 1` when the page never recurs. This is the
//! signal an offline optimal (Belady) evictor would use.
//!
//! The annotation is computed in one backward pass that remembers, per page,
//! the nearest later position seen so far. The output is identical to scanning
//! forward from every position.

extern crate alloc;

use crate::{PageId, Position};
use alloc::vec;
use alloc::vec::Vec;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap as NextSeen;

#[cfg(not(feature = "hashbrown"))]
use alloc::collections::BTreeMap as NextSeen;

/// Computes the exact next-use signal of `trace`.
///
/// Entry `i` (0-based) is the 1-based position of the next occurrence of
/// `trace[i]` after index `i`, or `trace.len() + 1` if there is none. Every
/// entry therefore exceeds `i + 1`.
///
/// # Examples
///
/// ```
/// use paging_rs::annotate_oracle;
///
/// let h = annotate_oracle(&[1, 2, 3, 4, 5, 1, 2, 3, 4, 1]);
/// assert_eq!(h, vec![6, 7, 8, 9, 11, 10, 11, 11, 11, 11]);
/// ```
pub fn annotate_oracle(trace: &[PageId]) -> Vec<Position> {
    let never = trace.len() + 1;
    let mut signal = vec![never; trace.len()];
    let mut next_seen: NextSeen<PageId, Position> = NextSeen::new();

    for (index, &page) in trace.iter().enumerate().rev() {
        if let Some(next) = next_seen.insert(page, index + 1) {
            signal[index] = next;
        }
    }

    log::trace!(
        "annotated {} positions over {} distinct pages",
        trace.len(),
        next_seen.len()
    );
    signal
}
