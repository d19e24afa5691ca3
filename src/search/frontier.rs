//! Priority frontier ordered by total estimated cost
//!
//! Wraps a binary heap so the lowest estimate pops first. Entries carry an
//! insertion sequence number that breaks ties first-in-first-out, making pop
//! order fully deterministic regardless of heap internals.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::search::arena::NodeId;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Entry {
    estimate: u32,
    seq: u64,
    id: NodeId,
}

impl Ord for Entry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap, we want the
        // lowest estimate and, among equals, the earliest insertion.
        other
            .estimate
            .cmp(&self.estimate)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl PartialOrd for Entry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered queue of node handles keyed by estimate
#[derive(Debug, Default)]
pub struct Frontier {
    heap: BinaryHeap<Entry>,
    next_seq: u64,
}

impl Frontier {
    /// Create an empty frontier
    pub const fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Insert a node handle with its total estimated cost
    pub fn push(&mut self, estimate: u32, id: NodeId) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { estimate, seq, id });
    }

    /// Remove and return the best candidate, if any
    pub fn pop(&mut self) -> Option<NodeId> {
        self.heap.pop().map(|entry| entry.id)
    }

    /// Number of queued candidates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether the frontier holds no candidates
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::Frontier;
    use crate::board::grid::Board;
    use crate::search::arena::{Node, NodeArena, NodeId};

    fn ids(count: usize) -> Vec<NodeId> {
        let mut arena = NodeArena::new();
        (0..count)
            .map(|i| {
                arena.insert(Node {
                    board: Board::solved(2),
                    blank: (1, 1),
                    path_cost: i as u32,
                    estimate: 0,
                    parent: None,
                })
            })
            .collect()
    }

    #[test]
    fn test_pops_lowest_estimate_first() {
        let handles = ids(3);
        let mut frontier = Frontier::new();
        for (estimate, &id) in [7, 2, 5].iter().zip(&handles) {
            frontier.push(*estimate, id);
        }

        assert_eq!(frontier.pop(), handles.get(1).copied());
        assert_eq!(frontier.pop(), handles.get(2).copied());
        assert_eq!(frontier.pop(), handles.first().copied());
        assert!(frontier.is_empty());
    }

    #[test]
    fn test_equal_estimates_pop_fifo() {
        let handles = ids(4);
        let mut frontier = Frontier::new();
        for &id in &handles {
            frontier.push(3, id);
        }

        let popped: Vec<_> = std::iter::from_fn(|| frontier.pop()).collect();
        assert_eq!(popped, handles);
    }
}
