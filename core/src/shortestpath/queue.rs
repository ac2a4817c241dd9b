use crate::types::{Distance, NodeID, Weight};
use rustc_hash::{FxHashMap, FxHashSet};
use std::cmp::Ordering;
use std::collections::BinaryHeap;

/// Selects the unfinalized node with the minimal tentative distance.
pub(crate) trait MinQueue<W: Weight> {
    /// Announce a new, lower tentative `distance` for `node`.
    fn update(&mut self, node: NodeID, distance: W);

    /// Remove and return the node with the minimal distance among the ones
    /// that have not been returned yet.
    fn pop_min(&mut self, distances: &FxHashMap<NodeID, Distance<W>>) -> Option<NodeID>;
}

fn distance_of<W: Weight>(distances: &FxHashMap<NodeID, Distance<W>>, node: NodeID) -> Distance<W> {
    distances.get(&node).copied().unwrap_or(Distance::Infinite)
}

/// Scans all remaining nodes on each selection, O(V) per call.
pub(crate) struct LinearScanQueue {
    remaining: Vec<NodeID>,
}

impl LinearScanQueue {
    pub(crate) fn new(nodes: impl Iterator<Item = NodeID>) -> LinearScanQueue {
        LinearScanQueue {
            remaining: nodes.collect(),
        }
    }
}

impl<W: Weight> MinQueue<W> for LinearScanQueue {
    fn update(&mut self, _node: NodeID, _distance: W) {
        // distances are read from the shared map on selection
    }

    fn pop_min(&mut self, distances: &FxHashMap<NodeID, Distance<W>>) -> Option<NodeID> {
        let mut min_idx = 0;
        let mut min_distance = distance_of(distances, *self.remaining.first()?);
        for (idx, node) in self.remaining.iter().enumerate().skip(1) {
            let d = distance_of(distances, *node);
            if d < min_distance {
                min_idx = idx;
                min_distance = d;
            }
        }
        Some(self.remaining.remove(min_idx))
    }
}

/// Entry in the priority queue, ordered so that the lowest distance is on top.
#[derive(Debug, Clone, Copy)]
struct HeapEntry<W> {
    node: NodeID,
    distance: W,
}

impl<W: Weight> PartialEq for HeapEntry<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Weight> Eq for HeapEntry<W> {}

impl<W: Weight> PartialOrd for HeapEntry<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Weight> Ord for HeapEntry<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed for min-heap behavior
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.node.cmp(&self.node))
    }
}

/// Binary heap with lazy deletion instead of decrease-key.
///
/// Only reached nodes are ever pushed, so an empty heap means all remaining
/// nodes are unreachable.
pub(crate) struct BinaryHeapQueue<W> {
    heap: BinaryHeap<HeapEntry<W>>,
    popped: FxHashSet<NodeID>,
}

impl<W: Weight> BinaryHeapQueue<W> {
    pub(crate) fn new() -> BinaryHeapQueue<W> {
        BinaryHeapQueue {
            heap: BinaryHeap::new(),
            popped: FxHashSet::default(),
        }
    }
}

impl<W: Weight> MinQueue<W> for BinaryHeapQueue<W> {
    fn update(&mut self, node: NodeID, distance: W) {
        self.heap.push(HeapEntry { node, distance });
    }

    fn pop_min(&mut self, distances: &FxHashMap<NodeID, Distance<W>>) -> Option<NodeID> {
        while let Some(entry) = self.heap.pop() {
            if self.popped.contains(&entry.node) {
                continue;
            }
            // skip entries that were superseded by a later update
            if Distance::Finite(entry.distance) > distance_of(distances, entry.node) {
                continue;
            }
            self.popped.insert(entry.node);
            return Some(entry.node);
        }
        None
    }
}
