//! Frontier containers for the search engines.
//!
//! All three frontiers expose the same push/pop interface so the traversal
//! loop can be written once and handed whichever container gives it the
//! discipline it needs: LIFO for depth-first, FIFO for breadth-first, and a
//! min-heap for best-first.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, VecDeque};

/// The uniform interface over the discovered-but-not-yet-expanded set.
///
/// Single-threaded and unbounded: `push` never blocks or refuses, `pop`
/// returns `None` only when the frontier is empty.
pub trait Frontier<T> {
    /// Adds an item to the frontier.
    fn push(&mut self, item: T);

    /// Removes and returns the next item, or `None` if the frontier is empty.
    ///
    /// Which item is "next" is the whole difference between the search
    /// disciplines; see the implementors.
    fn pop(&mut self) -> Option<T>;

    /// Number of items currently awaiting expansion.
    fn len(&self) -> usize;

    /// Returns `true` if the frontier contains no items.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A LIFO frontier: the most recently pushed item pops first.
///
/// Underlies depth-first search.
#[derive(Debug, Default)]
pub struct StackFrontier<T> {
    items: Vec<T>,
}

impl<T> StackFrontier<T> {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }
}

impl<T> Frontier<T> for StackFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A FIFO frontier: the oldest pushed item pops first.
///
/// Underlies breadth-first search.
#[derive(Debug, Default)]
pub struct QueueFrontier<T> {
    items: VecDeque<T>,
}

impl<T> QueueFrontier<T> {
    pub fn new() -> Self {
        Self {
            items: VecDeque::new(),
        }
    }
}

impl<T> Frontier<T> for QueueFrontier<T> {
    fn push(&mut self, item: T) {
        self.items.push_back(item);
    }

    fn pop(&mut self) -> Option<T> {
        self.items.pop_front()
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// A min-priority frontier: the smallest item (by `Ord`) pops first.
///
/// Underlies best-first search. `BinaryHeap` is a max-heap, so entries are
/// wrapped in `Reverse` to get min-heap behaviour; push and pop are both
/// O(log n).
///
/// Items that compare equal pop in an order the heap does not define, so
/// callers that need deterministic results must fold a tie-break into the
/// item's `Ord`; the A* engine orders its entries by `(f cost, creation
/// order)` for exactly this reason.
#[derive(Debug, Default)]
pub struct PriorityFrontier<T: Ord> {
    heap: BinaryHeap<Reverse<T>>,
}

impl<T: Ord> PriorityFrontier<T> {
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
        }
    }
}

impl<T: Ord> Frontier<T> for PriorityFrontier<T> {
    fn push(&mut self, item: T) {
        self.heap.push(Reverse(item));
    }

    fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|Reverse(item)| item)
    }

    fn len(&self) -> usize {
        self.heap.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stack_pops_last_in_first_out() {
        let mut frontier = StackFrontier::new();
        frontier.push(1);
        frontier.push(2);
        frontier.push(3);

        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn queue_pops_first_in_first_out() {
        let mut frontier = QueueFrontier::new();
        frontier.push(1);
        frontier.push(2);
        frontier.push(3);

        assert_eq!(frontier.pop(), Some(1));
        assert_eq!(frontier.pop(), Some(2));
        assert_eq!(frontier.pop(), Some(3));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn priority_pops_minimum_first() {
        let mut frontier = PriorityFrontier::new();
        frontier.push(10);
        frontier.push(5);
        frontier.push(15);

        assert_eq!(frontier.pop(), Some(5));
        assert_eq!(frontier.pop(), Some(10));
        assert_eq!(frontier.pop(), Some(15));
    }

    #[test]
    fn priority_equal_keys_pop_in_secondary_order() {
        // Tuples tie-break on the second element, mirroring how the A*
        // engine embeds creation order in its entries.
        let mut frontier = PriorityFrontier::new();
        frontier.push((1, 2));
        frontier.push((1, 0));
        frontier.push((0, 9));
        frontier.push((1, 1));

        assert_eq!(frontier.pop(), Some((0, 9)));
        assert_eq!(frontier.pop(), Some((1, 0)));
        assert_eq!(frontier.pop(), Some((1, 1)));
        assert_eq!(frontier.pop(), Some((1, 2)));
    }

    #[test]
    fn is_empty_tracks_len() {
        let mut frontier = StackFrontier::new();
        assert!(frontier.is_empty());
        frontier.push(1);
        assert!(!frontier.is_empty());
        assert_eq!(frontier.len(), 1);
        let _ = frontier.pop();
        assert!(frontier.is_empty());
    }
}
