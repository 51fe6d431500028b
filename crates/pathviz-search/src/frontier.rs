use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// An `f64` priority with a total order, for use as a heap key.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Score(pub(crate) f64);

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Score {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Score {}

/// A queued cell, ordered by `(key, seq)` ascending for use in `BinaryHeap`.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Entry<K> {
    pub(crate) key: K,
    pub(crate) seq: u64,
    pub(crate) idx: usize,
}

impl<K: Ord> Ord for Entry<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest key, then oldest.
        other
            .key
            .cmp(&self.key)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

impl<K: Ord> PartialOrd for Entry<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> PartialEq for Entry<K> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<K: Ord> Eq for Entry<K> {}

/// Min-priority queue of cell indices with FIFO tie-breaking.
///
/// Every push is stamped with a strictly increasing sequence number, so
/// cells with equal keys come out in insertion order.
pub(crate) struct Frontier<K> {
    heap: BinaryHeap<Entry<K>>,
    next_seq: u64,
}

impl<K: Ord> Frontier<K> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            next_seq: 0,
        }
    }

    /// Queue `idx` with `key`, returning the sequence number it was given.
    pub(crate) fn push(&mut self, key: K, idx: usize) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.heap.push(Entry { key, seq, idx });
        seq
    }

    pub(crate) fn pop(&mut self) -> Option<Entry<K>> {
        self.heap.pop()
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
