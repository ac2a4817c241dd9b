//! The graph store: owns all nodes and edges and keeps the adjacency of every
//! node consistent with the edge map.

use crate::{
    errors::{GraphError, Result},
    types::{Edge, NodeID},
};
use itertools::Itertools;
use rustc_hash::FxHashMap;
use std::fmt;

/// A node with its payload and the keys of its incident edges.
///
/// Adjacency is stored as sorted lists of the node IDs on the other end of
/// each edge, never as references into the edge map.
#[derive(Clone, Debug)]
pub struct Node<N> {
    payload: N,
    outgoing: Vec<NodeID>,
    ingoing: Vec<NodeID>,
}

impl<N> Node<N> {
    fn new(payload: N) -> Node<N> {
        Node {
            payload,
            outgoing: Vec::new(),
            ingoing: Vec::new(),
        }
    }

    pub fn payload(&self) -> &N {
        &self.payload
    }

    /// Targets of all edges that have this node as source.
    pub fn outgoing(&self) -> &[NodeID] {
        &self.outgoing
    }

    /// Sources of all edges that have this node as target.
    pub fn ingoing(&self) -> &[NodeID] {
        &self.ingoing
    }

    pub fn out_degree(&self) -> usize {
        self.outgoing.len()
    }

    pub fn in_degree(&self) -> usize {
        self.ingoing.len()
    }
}

/// Insert `value` into a sorted list, keeping it sorted.
fn insert_sorted(list: &mut Vec<NodeID>, value: NodeID) {
    if let Err(insertion_idx) = list.binary_search(&value) {
        list.insert(insertion_idx, value);
    }
}

fn remove_sorted(list: &mut Vec<NodeID>, value: NodeID) {
    if let Ok(idx) = list.binary_search(&value) {
        list.remove(idx);
    }
}

/// Some general statistical numbers about the current state of a graph.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct GraphStatistic {
    /// Number of nodes in the graph.
    pub nodes: usize,
    /// Number of edges in the graph.
    pub edges: usize,
    /// Sum of the outgoing and ingoing list lengths over all nodes.
    pub adjacency_entries: usize,
    /// Maximal number of outgoing edges of a node.
    pub max_fan_out: usize,
    /// Maximal number of ingoing edges of a node.
    pub max_fan_in: usize,
}

impl fmt::Display for GraphStatistic {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "nodes={}, edges={}, adjacency_entries={}, max_fan_out={}, max_fan_in={}",
            self.nodes, self.edges, self.adjacency_entries, self.max_fan_out, self.max_fan_in
        )
    }
}

/// Read-only access to the nodes and weighted edges of a graph.
///
/// This is all the shortest path solver needs from a graph.
pub trait EdgeContainer<W> {
    /// Return true if the given `node` is part of the graph.
    fn contains_node(&self, node: NodeID) -> bool;

    /// Number of nodes in the graph.
    fn node_count(&self) -> usize;

    /// Provides an iterator over the IDs of all nodes, in no particular order.
    fn node_ids<'a>(&'a self) -> Box<dyn Iterator<Item = NodeID> + 'a>;

    /// Get the target and weight of all outgoing edges of a given `node`.
    fn get_outgoing_edges<'a>(
        &'a self,
        node: NodeID,
    ) -> Box<dyn Iterator<Item = (NodeID, W)> + 'a>;

    /// Get the source and weight of all ingoing edges of a given `node`.
    fn get_ingoing_edges<'a>(&'a self, node: NodeID) -> Box<dyn Iterator<Item = (NodeID, W)> + 'a>;
}

/// A directed graph with node payloads of type `N` and edge weights of type `W`.
///
/// Node IDs are unique, and there is at most one edge for each ordered pair
/// of nodes. An edge can only exist while both of its nodes exist.
#[derive(Clone, Debug)]
pub struct Graph<N = f64, W = f64> {
    nodes: FxHashMap<NodeID, Node<N>>,
    edges: FxHashMap<Edge, W>,
}

impl<N, W> Default for Graph<N, W> {
    fn default() -> Self {
        Graph::new()
    }
}

impl<N, W> Graph<N, W> {
    /// Create a new and empty graph.
    pub fn new() -> Graph<N, W> {
        Graph {
            nodes: FxHashMap::default(),
            edges: FxHashMap::default(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize, edge_count: usize) -> Graph<N, W> {
        let mut nodes = FxHashMap::default();
        nodes.reserve(node_count);
        let mut edges = FxHashMap::default();
        edges.reserve(edge_count);
        Graph { nodes, edges }
    }

    /// Add a node with the given `payload`.
    ///
    /// Fails with [`GraphError::DuplicateNode`] if the ID is already used.
    pub fn add_node(&mut self, id: NodeID, payload: N) -> Result<()> {
        if self.nodes.contains_key(&id) {
            return Err(GraphError::DuplicateNode(id));
        }
        self.nodes.insert(id, Node::new(payload));
        Ok(())
    }

    /// Add a node with the default payload.
    pub fn add_default_node(&mut self, id: NodeID) -> Result<()>
    where
        N: Default,
    {
        self.add_node(id, N::default())
    }

    /// Add a directed edge from `source` to `target`.
    ///
    /// Both nodes have to exist already. An existing edge for the same pair
    /// is never overwritten, use [`Graph::update_edge_weight`] for this.
    pub fn add_edge(&mut self, source: NodeID, target: NodeID, weight: W) -> Result<()> {
        if !self.nodes.contains_key(&source) {
            return Err(GraphError::UnknownNode(source));
        }
        if !self.nodes.contains_key(&target) {
            return Err(GraphError::UnknownNode(target));
        }
        let edge = Edge::new(source, target);
        if self.edges.contains_key(&edge) {
            return Err(GraphError::DuplicateEdge(edge));
        }

        if let Some(source_node) = self.nodes.get_mut(&source) {
            insert_sorted(&mut source_node.outgoing, target);
        }
        if let Some(target_node) = self.nodes.get_mut(&target) {
            insert_sorted(&mut target_node.ingoing, source);
        }
        self.edges.insert(edge, weight);
        Ok(())
    }

    /// Add an edge with the default weight.
    pub fn add_default_edge(&mut self, source: NodeID, target: NodeID) -> Result<()>
    where
        W: Default,
    {
        self.add_edge(source, target, W::default())
    }

    /// Replace the weight of an existing edge and return the previous one.
    pub fn update_edge_weight(&mut self, source: NodeID, target: NodeID, weight: W) -> Result<W> {
        let edge = Edge::new(source, target);
        match self.edges.get_mut(&edge) {
            Some(existing) => Ok(std::mem::replace(existing, weight)),
            None => Err(GraphError::UnknownEdge(edge)),
        }
    }

    /// Delete an existing edge and return its weight.
    ///
    /// The edge is removed from the edge map and from the adjacency lists of
    /// both nodes.
    pub fn remove_edge(&mut self, source: NodeID, target: NodeID) -> Result<W> {
        let edge = Edge::new(source, target);
        let weight = self
            .edges
            .remove(&edge)
            .ok_or(GraphError::UnknownEdge(edge))?;

        if let Some(source_node) = self.nodes.get_mut(&source) {
            remove_sorted(&mut source_node.outgoing, target);
        }
        if let Some(target_node) = self.nodes.get_mut(&target) {
            remove_sorted(&mut target_node.ingoing, source);
        }
        Ok(weight)
    }

    /// Delete a node and return its payload.
    ///
    /// All edges where the node is the source or the target are deleted
    /// together with the node, no edge referencing it survives the call.
    pub fn remove_node(&mut self, id: NodeID) -> Result<N> {
        let node = self.nodes.remove(&id).ok_or(GraphError::UnknownNode(id))?;

        for target in node.outgoing {
            let removed = self.edges.remove(&Edge::new(id, target));
            debug_assert!(removed.is_some(), "missing edge {} -> {}", id, target);
            if let Some(target_node) = self.nodes.get_mut(&target) {
                remove_sorted(&mut target_node.ingoing, id);
            }
        }
        for source in node.ingoing {
            // a self-loop was already removed with the outgoing edges
            if source == id {
                continue;
            }
            let removed = self.edges.remove(&Edge::new(source, id));
            debug_assert!(removed.is_some(), "missing edge {} -> {}", source, id);
            if let Some(source_node) = self.nodes.get_mut(&source) {
                remove_sorted(&mut source_node.outgoing, id);
            }
        }

        Ok(node.payload)
    }

    /// Remove all nodes and edges.
    pub fn clear(&mut self) {
        self.edges.clear();
        self.nodes.clear();
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Total number of entries in all outgoing and ingoing lists.
    ///
    /// Each edge is listed once at its source and once at its target, so this
    /// is always twice the number of edges.
    pub fn adjacency_entry_count(&self) -> usize {
        self.nodes
            .values()
            .map(|n| n.outgoing.len() + n.ingoing.len())
            .sum()
    }

    pub fn contains_node(&self, id: NodeID) -> bool {
        self.nodes.contains_key(&id)
    }

    pub fn contains_edge(&self, source: NodeID, target: NodeID) -> bool {
        self.edges.contains_key(&Edge::new(source, target))
    }

    pub fn get_node(&self, id: NodeID) -> Option<&Node<N>> {
        self.nodes.get(&id)
    }

    pub fn get_node_payload(&self, id: NodeID) -> Option<&N> {
        self.nodes.get(&id).map(|n| &n.payload)
    }

    pub fn get_node_payload_mut(&mut self, id: NodeID) -> Option<&mut N> {
        self.nodes.get_mut(&id).map(|n| &mut n.payload)
    }

    pub fn get_weight(&self, source: NodeID, target: NodeID) -> Option<&W> {
        self.edges.get(&Edge::new(source, target))
    }

    /// Iterate over all nodes, in no particular order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeID, &Node<N>)> + '_ {
        self.nodes.iter().map(|(id, n)| (*id, n))
    }

    /// Iterate over all edges and their weights, in no particular order.
    pub fn edges(&self) -> impl Iterator<Item = (Edge, &W)> + '_ {
        self.edges.iter().map(|(e, w)| (*e, w))
    }

    pub fn statistics(&self) -> GraphStatistic {
        let mut stats = GraphStatistic {
            nodes: self.nodes.len(),
            edges: self.edges.len(),
            ..Default::default()
        };
        for n in self.nodes.values() {
            stats.adjacency_entries += n.outgoing.len() + n.ingoing.len();
            stats.max_fan_out = stats.max_fan_out.max(n.outgoing.len());
            stats.max_fan_in = stats.max_fan_in.max(n.ingoing.len());
        }
        stats
    }
}

impl<N, W: Copy> EdgeContainer<W> for Graph<N, W> {
    fn contains_node(&self, node: NodeID) -> bool {
        self.nodes.contains_key(&node)
    }

    fn node_count(&self) -> usize {
        self.nodes.len()
    }

    fn node_ids<'a>(&'a self) -> Box<dyn Iterator<Item = NodeID> + 'a> {
        Box::new(self.nodes.keys().copied())
    }

    fn get_outgoing_edges<'a>(
        &'a self,
        node: NodeID,
    ) -> Box<dyn Iterator<Item = (NodeID, W)> + 'a> {
        if let Some(n) = self.nodes.get(&node) {
            let it = n.outgoing.iter().filter_map(move |target| {
                self.edges
                    .get(&Edge::new(node, *target))
                    .map(|w| (*target, *w))
            });
            return Box::new(it);
        }
        Box::new(std::iter::empty())
    }

    fn get_ingoing_edges<'a>(&'a self, node: NodeID) -> Box<dyn Iterator<Item = (NodeID, W)> + 'a> {
        if let Some(n) = self.nodes.get(&node) {
            let it = n.ingoing.iter().filter_map(move |source| {
                self.edges
                    .get(&Edge::new(*source, node))
                    .map(|w| (*source, *w))
            });
            return Box::new(it);
        }
        Box::new(std::iter::empty())
    }
}

impl<N: fmt::Display, W: fmt::Display> fmt::Display for Graph<N, W> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        writeln!(f, "Nodes")?;
        for (id, node) in self.nodes.iter().sorted_by_key(|(id, _)| **id) {
            writeln!(f, "{} ({})", id, node.payload)?;
        }
        writeln!(f, "Edges")?;
        for (edge, weight) in self.edges.iter().sorted_by_key(|(e, _)| **e) {
            writeln!(f, "{} ({})", edge, weight)?;
        }
        Ok(())
    }
}
