//! Single-source shortest paths with Dijkstra's algorithm.
//!
//! Edge weights must be non-negative. The solver finalizes nodes in order of
//! their distance from the source and relaxes the outgoing edges of each
//! finalized node. A query can stop early once a given target is finalized.

mod queue;

use crate::{
    errors::{GraphError, Result},
    graph::EdgeContainer,
    path,
    types::{Distance, NodeID, Weight},
};
use queue::{BinaryHeapQueue, LinearScanQueue, MinQueue};
use rustc_hash::{FxHashMap, FxHashSet};
use strum_macros::{Display, EnumString};

/// Strategy used to select the next node to finalize.
///
/// Both produce the same distances. Among nodes with equal distance the
/// selection order is unspecified, so predecessors of equally short paths
/// can differ.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Display, EnumString)]
pub enum QueueKind {
    /// Scan all remaining nodes for each selection, O(V²) in total.
    #[strum(serialize = "linear")]
    LinearScan,
    /// Binary heap with lazy deletion, O((V + E) log V) in total.
    #[default]
    #[strum(serialize = "heap")]
    BinaryHeap,
}

/// Distances and predecessors computed from a single source node.
#[derive(Clone, Debug)]
pub struct ShortestPaths<W> {
    source: NodeID,
    /// Distance from the source for each node of the graph.
    pub distances: FxHashMap<NodeID, Distance<W>>,
    /// Predecessor on a shortest path for each node of the graph, `None` for
    /// the source and for all nodes that were not reached.
    pub predecessors: FxHashMap<NodeID, Option<NodeID>>,
    finalized: usize,
}

impl<W: Weight> ShortestPaths<W> {
    pub fn source(&self) -> NodeID {
        self.source
    }

    /// Distance of `node` from the source, `None` if the node was not part
    /// of the graph.
    pub fn distance(&self, node: NodeID) -> Option<Distance<W>> {
        self.distances.get(&node).copied()
    }

    pub fn predecessor(&self, node: NodeID) -> Option<NodeID> {
        self.predecessors.get(&node).copied().flatten()
    }

    /// Number of nodes that were finalized before the computation stopped.
    pub fn finalized_count(&self) -> usize {
        self.finalized
    }

    /// Ordered path from the source to `target`, or `None` if `target` was not
    /// reached.
    pub fn path_to(&self, target: NodeID) -> Option<Vec<NodeID>> {
        if !self.distances.contains_key(&target) {
            return None;
        }
        let p = path::reconstruct(&self.predecessors, self.source, target);
        if p.first() == Some(&self.source) {
            Some(p)
        } else {
            None
        }
    }
}

/// Compute the shortest paths from `source`, stopping as soon as `target` is
/// finalized.
///
/// Only the distances of nodes finalized before `target` are complete.
/// Fails with [`GraphError::UnknownNode`] if `source` or `target` is not part
/// of the graph.
pub fn compute<W, G>(
    graph: &G,
    source: NodeID,
    target: NodeID,
) -> Result<ShortestPaths<W>>
where
    W: Weight,
    G: EdgeContainer<W> + ?Sized,
{
    compute_with(graph, source, Some(target), QueueKind::default())
}

/// Compute the shortest paths from `source` to all reachable nodes.
pub fn compute_all<W, G>(graph: &G, source: NodeID) -> Result<ShortestPaths<W>>
where
    W: Weight,
    G: EdgeContainer<W> + ?Sized,
{
    compute_with(graph, source, None, QueueKind::default())
}

/// Compute the shortest paths from `source` with the given selection strategy.
pub fn compute_with<W, G>(
    graph: &G,
    source: NodeID,
    target: Option<NodeID>,
    queue: QueueKind,
) -> Result<ShortestPaths<W>>
where
    W: Weight,
    G: EdgeContainer<W> + ?Sized,
{
    if !graph.contains_node(source) {
        return Err(GraphError::UnknownNode(source));
    }
    if let Some(target) = target {
        if !graph.contains_node(target) {
            return Err(GraphError::UnknownNode(target));
        }
    }

    match queue {
        QueueKind::LinearScan => {
            let q = LinearScanQueue::new(graph.node_ids());
            Ok(run(graph, source, target, q))
        }
        QueueKind::BinaryHeap => Ok(run(graph, source, target, BinaryHeapQueue::new())),
    }
}

fn run<W, G, Q>(graph: &G, source: NodeID, target: Option<NodeID>, mut queue: Q) -> ShortestPaths<W>
where
    W: Weight,
    G: EdgeContainer<W> + ?Sized,
    Q: MinQueue<W>,
{
    let mut distances: FxHashMap<NodeID, Distance<W>> = FxHashMap::default();
    distances.reserve(graph.node_count());
    let mut predecessors: FxHashMap<NodeID, Option<NodeID>> = FxHashMap::default();
    predecessors.reserve(graph.node_count());
    for n in graph.node_ids() {
        distances.insert(n, Distance::Infinite);
        predecessors.insert(n, None);
    }
    distances.insert(source, Distance::zero());
    queue.update(source, W::zero());

    let mut finalized: FxHashSet<NodeID> = FxHashSet::default();

    while let Some(node) = queue.pop_min(&distances) {
        let current = distances.get(&node).copied().unwrap_or(Distance::Infinite);
        trace!("selected node {} with distance {:?}", node, current);

        let current = match current {
            Distance::Finite(d) => d,
            Distance::Infinite => {
                debug!(
                    "no reachable node left after finalizing {} nodes",
                    finalized.len()
                );
                break;
            }
        };
        finalized.insert(node);

        if Some(node) == target {
            debug!(
                "reached target {} after finalizing {} nodes",
                node,
                finalized.len()
            );
            break;
        }

        for (neighbour, weight) in graph.get_outgoing_edges(node) {
            if finalized.contains(&neighbour) {
                continue;
            }
            let candidate = match current.checked_sum(weight) {
                Some(candidate) => candidate,
                None => {
                    trace!("distance to {} via {} overflows", neighbour, node);
                    continue;
                }
            };
            let known = distances.entry(neighbour).or_insert(Distance::Infinite);
            if Distance::Finite(candidate) < *known {
                trace!(
                    "relaxing {} -> {}: {:?} to {:?}",
                    node,
                    neighbour,
                    known,
                    candidate
                );
                *known = Distance::Finite(candidate);
                predecessors.insert(neighbour, Some(node));
                queue.update(neighbour, candidate);
            }
        }
    }

    ShortestPaths {
        source,
        distances,
        predecessors,
        finalized: finalized.len(),
    }
}

#[cfg(test)]
mod tests;
