//! Priority queue of open search nodes.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Priority of a node with path cost `cost` and heuristic `h`.
///
/// Equals `cost + 1.2 * h` scaled by five, so ordering is exact in integers.
#[inline]
pub fn priority(cost: usize, h: i64) -> i64 {
    5 * cost as i64 + 6 * h
}

#[derive(Debug, PartialEq, Eq)]
struct Entry {
    priority: i64,
    seq: u64,
    node: usize,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap is a max-heap: lowest priority first, then oldest.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-priority queue of node indices with FIFO tie-breaking.
///
/// # Examples
///
/// ```
/// use colormerge_solver::frontier::Frontier;
///
/// let mut frontier = Frontier::new();
/// frontier.push(0, 10, 0);
/// frontier.push(1, 2, 1);
/// frontier.push(1, 2, 2);
///
/// assert_eq!(frontier.pop(), Some(1));
/// assert_eq!(frontier.pop(), Some(2));
/// assert_eq!(frontier.pop(), Some(0));
/// assert_eq!(frontier.pop(), None);
/// ```
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enqueues `node` reached at path cost `cost` with heuristic `h`.
    pub fn push(&mut self, cost: usize, h: i64, node: usize) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry {
            priority: priority(cost, h),
            seq,
            node,
        });
    }

    /// Dequeues the node with the lowest priority.
    pub fn pop(&mut self) -> Option<usize> {
        self.heap.pop().map(|e| e.node)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
