use crate::errors::Result;
use crate::graph::Graph;

/// Creates an example graph with the following structure:
///
/// ```plain
///            4          10
///   +---+ -----> +---+ -----> +---+   11    +---+
///   | 0 |        | 1 |        | 3 | ------> | 5 |
///   +---+        +---+        +---+         +---+
///     |            |            ^
///   2 |          5 |            | 4
///     v            v            |
///   +---+ <--------+          +---+
///   | 2 | ------------------> | 4 |
///   +---+          3          +---+
/// ```
///
/// The shortest path from 0 to 5 is 0 -> 2 -> 4 -> 3 -> 5 with distance 20.
pub(crate) fn create_weighted_dag() -> Result<Graph<f64, f64>> {
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

/// Creates an example graph with two disconnected parts and a cycle:
///
/// ```plain
///       1         1
///  +---+ --> +---+ --> +---+      +---+       +---+
///  | 0 |     | 1 |     | 2 |      | 3 | ----> | 4 |
///  +---+ <-- +---+     +---+      +---+   2   +---+
///       1
/// ```
///
/// Node 5 has no edges at all.
pub(crate) fn create_disconnected_graph() -> Result<Graph<String, u32>> {
    let mut g = Graph::new();
    for i in 0..=5 {
        g.add_node(i, format!("n{}", i))?;
    }

    g.add_edge(0, 1, 1)?;
    g.add_edge(1, 0, 1)?;
    g.add_edge(1, 2, 1)?;
    g.add_edge(3, 4, 2)?;

    Ok(g)
}
