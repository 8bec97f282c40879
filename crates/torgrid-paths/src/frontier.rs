//! Frontier disciplines for the shared search driver.

use std::collections::{BinaryHeap, VecDeque};

use torgrid_core::Point;

/// Entry in the priority frontier. Ordered in reverse so the max-heap
/// [`BinaryHeap`] pops the smallest `(f, pos)` pair first; the position
/// tie-break makes equal-cost pops deterministic, the way a
/// `(cost, coordinate)` tuple heap behaves.
#[derive(Clone, Copy, PartialEq)]
pub(crate) struct HeapEntry {
    pub f: f64,
    pub pos: Point,
}

impl Eq for HeapEntry {}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        other
            .f
            .total_cmp(&self.f)
            .then_with(|| other.pos.cmp(&self.pos))
    }
}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// A queue of cells awaiting expansion. The priority is carried through
/// `push`/`pop` so priority frontiers can report the cost a cell was
/// enqueued with; stack and queue frontiers ignore it.
pub(crate) trait Frontier: Default {
    fn push(&mut self, p: Point, priority: f64);
    fn pop(&mut self) -> Option<(Point, f64)>;
    fn is_empty(&self) -> bool;
}

/// Last-in first-out: depth-first expansion.
#[derive(Default)]
pub(crate) struct Lifo(Vec<Point>);

impl Frontier for Lifo {
    fn push(&mut self, p: Point, _priority: f64) {
        self.0.push(p);
    }

    fn pop(&mut self) -> Option<(Point, f64)> {
        self.0.pop().map(|p| (p, 0.0))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// First-in first-out: breadth-first expansion.
#[derive(Default)]
pub(crate) struct Fifo(VecDeque<Point>);

impl Frontier for Fifo {
    fn push(&mut self, p: Point, _priority: f64) {
        self.0.push_back(p);
    }

    fn pop(&mut self) -> Option<(Point, f64)> {
        self.0.pop_front().map(|p| (p, 0.0))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Min-priority expansion for the informed and cost-ordered searches.
#[derive(Default)]
pub(crate) struct MinHeap(BinaryHeap<HeapEntry>);

impl Frontier for MinHeap {
    fn push(&mut self, p: Point, priority: f64) {
        self.0.push(HeapEntry { f: priority, pos: p });
    }

    fn pop(&mut self) -> Option<(Point, f64)> {
        self.0.pop().map(|e| (e.pos, e.f))
    }

    fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
