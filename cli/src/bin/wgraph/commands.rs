use anyhow::{bail, Context, Result};
use log::info;
use std::io::Write;
use weightgraph_core::{
    graph::Graph,
    shortestpath::{compute_with, QueueKind, ShortestPaths},
    types::NodeID,
};

use crate::settings::{Query, Stress};

/// The six node example graph with a shortest path 0 -> 2 -> 4 -> 3 -> 5.
pub fn example_graph() -> Result<Graph<f64, f64>> {
    let mut g = Graph::new();
    for i in 0..=5 {
        g.add_default_node(i)?;
    }

    g.add_edge(0, 1, 4.0)?;
    g.add_edge(0, 2, 2.0)?;
    g.add_edge(1, 2, 5.0)?;
    g.add_edge(1, 3, 10.0)?;
    g.add_edge(2, 4, 3.0)?;
    g.add_edge(4, 3, 4.0)?;
    g.add_edge(3, 5, 11.0)?;

    Ok(g)
}

fn format_path(path: &[NodeID], result: &ShortestPaths<f64>) -> String {
    path.iter()
        .map(|n| match result.distance(*n) {
            Some(d) => format!("{} ({})", n, d),
            None => n.to_string(),
        })
        .collect::<Vec<_>>()
        .join(" => ")
}

fn print_path(
    out: &mut dyn Write,
    result: &ShortestPaths<f64>,
    source: NodeID,
    target: NodeID,
) -> Result<()> {
    match result.path_to(target) {
        Some(path) => {
            writeln!(out, "The shortest path from {} to {} is:", source, target)?;
            writeln!(out, "{}", format_path(&path, result))?;
        }
        None => writeln!(out, "There is no path from {} to {}.", source, target)?,
    }
    Ok(())
}

/// Print the example graph, the predecessor of each node and the shortest path.
pub fn demo(out: &mut dyn Write) -> Result<()> {
    let g = example_graph()?;
    writeln!(out, "My graph")?;
    writeln!(out, "{}", g)?;

    let (source, target) = (0, 5);
    let result = compute_with(&g, source, Some(target), QueueKind::default())?;

    writeln!(out, "Prev result")?;
    let mut predecessors: Vec<_> = result.predecessors.iter().collect();
    predecessors.sort();
    for (node, prev) in predecessors {
        match prev {
            Some(prev) => writeln!(out, "{}, {}", node, prev)?,
            None => writeln!(out, "{}, none", node)?,
        }
    }

    print_path(out, &result, source, target)
}

/// Query the example graph with the source, target and queue of the settings.
pub fn path(out: &mut dyn Write, query: &Query) -> Result<()> {
    let queue: QueueKind = query
        .queue
        .parse()
        .with_context(|| format!("unknown queue kind '{}'", query.queue))?;
    let g = example_graph()?;
    let result = compute_with(&g, query.source, Some(query.target), queue)?;
    info!(
        "finalized {} of {} nodes with {} queue",
        result.finalized_count(),
        g.node_count(),
        queue
    );
    print_path(out, &result, query.source, query.target)
}

/// Repeatedly add a node and an edge and remove an older node, checking that
/// the graph size stays constant.
pub fn stress(settings: &Stress) -> Result<()> {
    let mut g: Graph<Vec<f64>, ()> = Graph::with_capacity(settings.initial_nodes as usize + 1, 1);
    for i in 0..settings.initial_nodes {
        g.add_default_node(i)?;
    }
    let report_every = settings.report_every.max(1);

    let start = settings.initial_nodes.max(2);
    for i in start..start.saturating_add(settings.iterations) {
        if !g.contains_node(i) {
            g.add_node(i, Vec::with_capacity(1_000))?;
        }
        if g.contains_node(i - 1) && !g.contains_edge(i - 1, i) {
            g.add_default_edge(i - 1, i)?;
        }
        if g.contains_node(i - 2) {
            g.remove_node(i - 2)?;
        }

        let adjacency_entries = g.adjacency_entry_count();
        if adjacency_entries != 2 * g.edge_count() {
            bail!(
                "adjacency lists have {} entries for {} edges",
                adjacency_entries,
                g.edge_count()
            );
        }
        if g.edge_count() > 1 || g.node_count() > settings.initial_nodes.max(2) as usize {
            bail!("graph grew to {} after {} iterations", g.statistics(), i - start + 1);
        }
        if (i - start + 1) % report_every == 0 {
            info!(
                "{} - {} - {}",
                g.node_count(),
                g.edge_count(),
                adjacency_entries
            );
        }
    }
    info!("finished stress test with {}", g.statistics());
    Ok(())
}
