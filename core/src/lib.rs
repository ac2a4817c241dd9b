#![warn(clippy::panic)]
#![warn(clippy::expect_used)]

//! A mutable directed, weighted graph store with single-source shortest path
//! queries.
//!
//! Nodes and edges are owned by a [`graph::Graph`], which keeps the outgoing
//! and ingoing adjacency of every node consistent with its edge map.
//! [`shortestpath::compute`] runs Dijkstra's algorithm over any
//! [`graph::EdgeContainer`] and [`path::reconstruct`] turns the resulting
//! predecessor map into an ordered node sequence.

#[macro_use]
extern crate log;

pub mod errors;
pub mod graph;
pub mod path;
pub mod shortestpath;
pub mod types;
#[cfg(test)]
pub(crate) mod util;
