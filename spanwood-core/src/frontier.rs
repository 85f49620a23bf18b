//! Min-priority queue of candidate vertices for Prim's traversal.
//!
//! Items are never updated in place. The same vertex may be queued several
//! times with different weights; callers discard the stale copies on pop.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::graph::Weight;

/// A candidate vertex together with the cost of the edge reaching it.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct FrontierItem {
    /// Vertex reached by the candidate edge.
    pub vertex: usize,
    /// Weight of the candidate edge.
    pub weight: Weight,
}

impl FrontierItem {
    /// Creates a frontier item.
    #[must_use]
    pub const fn new(vertex: usize, weight: Weight) -> Self {
        Self { vertex, weight }
    }
}

/// Reverses [`FrontierItem`] ordering so [`BinaryHeap`] behaves as a
/// min-heap. Ties on weight fall back to the lower vertex id.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
struct MinFirst(FrontierItem);

impl Ord for MinFirst {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .0
            .weight
            .cmp(&self.0.weight)
            .then_with(|| other.0.vertex.cmp(&self.0.vertex))
    }
}

impl PartialOrd for MinFirst {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Binary min-heap keyed on [`FrontierItem::weight`].
///
/// # Examples
/// ```
/// use spanwood_core::{FrontierItem, FrontierQueue};
///
/// let mut queue = FrontierQueue::default();
/// queue.push(FrontierItem::new(2, 9));
/// queue.push(FrontierItem::new(1, 3));
/// assert_eq!(queue.pop_min().map(|item| item.weight), Some(3));
/// assert_eq!(queue.len(), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct FrontierQueue {
    heap: BinaryHeap<MinFirst>,
}

impl FrontierQueue {
    /// Creates an empty queue with room for `capacity` items.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
        }
    }

    /// Enqueues `item` in `O(log n)`.
    pub fn push(&mut self, item: FrontierItem) {
        self.heap.push(MinFirst(item));
    }

    /// Removes and returns the lowest-weight item in `O(log n)`.
    pub fn pop_min(&mut self) -> Option<FrontierItem> {
        self.heap.pop().map(|MinFirst(item)| item)
    }

    /// Number of queued items, stale copies included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Returns `true` when nothing is queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
