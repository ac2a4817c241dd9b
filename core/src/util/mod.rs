pub(crate) mod example_graphs;
