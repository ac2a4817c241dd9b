use crate::types::NodeID;
use rustc_hash::{FxHashMap, FxHashSet};

/// Walk the predecessor links from `target` until a node without predecessor
/// is reached and return the visited nodes in source-to-target order.
///
/// If `target` was not reached the result is just `[target]`. Callers detect
/// this case by comparing the first node of the result with `source`.
/// A malformed predecessor map with a cycle ends the walk before the first
/// repeated node.
pub fn reconstruct(
    predecessors: &FxHashMap<NodeID, Option<NodeID>>,
    source: NodeID,
    target: NodeID,
) -> Vec<NodeID> {
    let mut path = vec![target];
    let mut visited = FxHashSet::default();
    visited.insert(target);

    let mut current = target;
    while let Some(Some(previous)) = predecessors.get(&current) {
        if !visited.insert(*previous) {
            warn!(
                "predecessor map contains a cycle through node {}",
                previous
            );
            break;
        }
        path.push(*previous);
        current = *previous;
    }
    path.reverse();

    if current != source {
        trace!("no path from {} to {}, walk ended at {}", source, target, current);
    }
    path
}
