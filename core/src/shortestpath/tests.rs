use super::*;
use crate::graph::Graph;
use crate::util::example_graphs::{create_disconnected_graph, create_weighted_dag};
use pretty_assertions::assert_eq;
use rand::{rngs::SmallRng, Rng, SeedableRng};

const ALL_QUEUES: [QueueKind; 2] = [QueueKind::LinearScan, QueueKind::BinaryHeap];

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn shortest_path_in_example_dag() {
    init_logging();
    let g = create_weighted_dag().unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, Some(5), queue).unwrap();

        assert_eq!(Some(Distance::Finite(0.0)), result.distance(0));
        assert_eq!(Some(Distance::Finite(20.0)), result.distance(5));
        assert_eq!(Some(3), result.predecessor(5));
        assert_eq!(None, result.predecessor(0));
        assert_eq!(
            vec![0, 2, 4, 3, 5],
            path::reconstruct(&result.predecessors, 0, 5)
        );
        assert_eq!(Some(vec![0, 2, 4, 3, 5]), result.path_to(5));
    }
}

#[test]
fn default_queue_is_binary_heap() {
    let g = create_weighted_dag().unwrap();
    let result = compute(&g, 0, 5).unwrap();
    assert_eq!(0, result.source());
    assert_eq!(Some(Distance::Finite(20.0)), result.distance(5));
    assert_eq!(QueueKind::BinaryHeap, QueueKind::default());
}

#[test]
fn full_run_distances() {
    let g = create_weighted_dag().unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, None, queue).unwrap();

        let expected = [(0, 0.0), (1, 4.0), (2, 2.0), (3, 9.0), (4, 5.0), (5, 20.0)];
        for (node, d) in expected {
            assert_eq!(Some(Distance::Finite(d)), result.distance(node));
        }
        assert_eq!(6, result.finalized_count());

        // every predecessor lies on a shortest path
        for node in 1..=5 {
            let p = result.predecessor(node).unwrap();
            let w = *g.get_weight(p, node).unwrap();
            assert_eq!(result.distance(node), result.distance(p).map(|d| d.add_weight(w)));
        }
    }
}

#[test]
fn stops_when_target_is_finalized() {
    let g = create_weighted_dag().unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, Some(2), queue).unwrap();

        assert_eq!(2, result.finalized_count());
        assert_eq!(Some(Distance::Finite(2.0)), result.distance(2));
        // relaxed by the source but never finalized
        assert_eq!(Some(Distance::Finite(4.0)), result.distance(1));
        // never relaxed before the early stop
        assert_eq!(Some(Distance::Infinite), result.distance(4));
        assert_eq!(Some(Distance::Infinite), result.distance(3));
        assert_eq!(None, result.predecessor(4));
        assert_eq!(Some(vec![0, 2]), result.path_to(2));
    }
}

#[test]
fn source_equals_target() {
    let g = create_weighted_dag().unwrap();
    for queue in ALL_QUEUES {
        let result = compute_with(&g, 3, Some(3), queue).unwrap();
        assert_eq!(Some(Distance::Finite(0.0)), result.distance(3));
        assert_eq!(1, result.finalized_count());
        assert_eq!(Some(vec![3]), result.path_to(3));
    }
}

#[test]
fn unreachable_nodes_stay_infinite() {
    init_logging();
    let g = create_disconnected_graph().unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, None, queue).unwrap();

        assert_eq!(Some(Distance::Finite(0)), result.distance(0));
        assert_eq!(Some(Distance::Finite(1)), result.distance(1));
        assert_eq!(Some(Distance::Finite(2)), result.distance(2));
        for node in 3..=5 {
            assert_eq!(Some(Distance::Infinite), result.distance(node));
            assert_eq!(None, result.predecessor(node));
            assert_eq!(None, result.path_to(node));
        }
        assert_eq!(3, result.finalized_count());
        assert_eq!(Some(vec![0, 1, 2]), result.path_to(2));
    }
}

#[test]
fn isolated_target_gives_single_node_path() {
    let g = create_disconnected_graph().unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, Some(5), queue).unwrap();

        assert_eq!(Some(Distance::Infinite), result.distance(5));
        let path = path::reconstruct(&result.predecessors, 0, 5);
        assert_eq!(vec![5], path);
        assert_ne!(Some(&0), path.first());
        assert_eq!(None, result.path_to(5));
    }
}

#[test]
fn cycle_is_traversed_once() {
    let g = create_disconnected_graph().unwrap();
    let result = compute_all(&g, 1).unwrap();

    assert_eq!(Some(Distance::Finite(1)), result.distance(0));
    assert_eq!(Some(1), result.predecessor(0));
    assert_eq!(None, result.predecessor(1));
    assert_eq!(Some(vec![1, 0]), result.path_to(0));
}

#[test]
fn removed_source_is_unknown() {
    let mut g = create_weighted_dag().unwrap();
    g.remove_node(0).unwrap();

    assert_eq!(
        Some(GraphError::UnknownNode(0)),
        compute(&g, 0, 5).err()
    );
    assert_eq!(Some(GraphError::UnknownNode(0)), compute_all(&g, 0).err());
}

#[test]
fn unknown_target_is_rejected() {
    let g = create_weighted_dag().unwrap();
    assert_eq!(Some(GraphError::UnknownNode(42)), compute(&g, 0, 42).err());
}

#[test]
fn removed_edge_changes_path() {
    let mut g = create_weighted_dag().unwrap();
    g.remove_edge(2, 4).unwrap();

    let result = compute(&g, 0, 5).unwrap();
    assert_eq!(Some(Distance::Finite(25.0)), result.distance(5));
    assert_eq!(Some(vec![0, 1, 3, 5]), result.path_to(5));
}

#[test]
fn zero_weight_edges() {
    let mut g: Graph<(), u32> = Graph::new();
    for i in 0..4 {
        g.add_default_node(i).unwrap();
    }
    g.add_edge(0, 1, 0).unwrap();
    g.add_edge(1, 2, 0).unwrap();
    g.add_edge(0, 2, 1).unwrap();
    g.add_edge(2, 3, 5).unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, Some(3), queue).unwrap();
        assert_eq!(Some(Distance::Finite(5)), result.distance(3));
        assert_eq!(Some(vec![0, 1, 2, 3]), result.path_to(3));
    }
}

#[test]
fn queue_kind_from_str() {
    assert_eq!(Ok(QueueKind::LinearScan), "linear".parse());
    assert_eq!(Ok(QueueKind::BinaryHeap), "heap".parse());
    assert!("fibonacci".parse::<QueueKind>().is_err());
    assert_eq!("linear", QueueKind::LinearScan.to_string());
}

fn random_graph(rng: &mut SmallRng, nodes: NodeID, edges: usize) -> Graph<(), u64> {
    let mut g = Graph::with_capacity(nodes as usize, edges);
    for i in 0..nodes {
        g.add_default_node(i).unwrap();
    }
    for _ in 0..edges {
        let source = rng.gen_range(0..nodes);
        let target = rng.gen_range(0..nodes);
        if !g.contains_edge(source, target) {
            g.add_edge(source, target, rng.gen_range(0..=20)).unwrap();
        }
    }
    g
}

#[test]
fn random_graphs_are_consistent() {
    let mut rng = SmallRng::seed_from_u64(4711);

    for _ in 0..25 {
        let g = random_graph(&mut rng, 60, 150);
        let source = rng.gen_range(0..60);

        let linear = compute_with(&g, source, None, QueueKind::LinearScan).unwrap();
        let heap = compute_with(&g, source, None, QueueKind::BinaryHeap).unwrap();
        assert_eq!(linear.distances, heap.distances);
        assert_eq!(Some(Distance::Finite(0)), heap.distance(source));

        for (node, d) in heap.distances.iter() {
            match heap.predecessor(*node) {
                Some(p) => {
                    let w = *g.get_weight(p, *node).unwrap();
                    assert_eq!(Some(*d), heap.distance(p).map(|pd| pd.add_weight(w)));
                }
                None => assert!(*node == source || d.is_infinite()),
            }
        }

        // no edge can shorten a final distance
        for (e, w) in g.edges() {
            if let Some(Distance::Finite(ds)) = heap.distance(e.source) {
                assert!(heap.distance(e.target).unwrap() <= Distance::Finite(ds + *w));
            }
        }

        let target = rng.gen_range(0..60);
        let early = compute(&g, source, target).unwrap();
        assert_eq!(heap.distance(target), early.distance(target));
        match early.path_to(target) {
            Some(p) => {
                assert_eq!(Some(&source), p.first());
                assert_eq!(Some(&target), p.last());
            }
            None => assert_eq!(Some(Distance::Infinite), early.distance(target)),
        }
    }
}

#[test]
fn overflowing_path_is_unreachable() {
    let mut g: Graph<(), u8> = Graph::new();
    for i in 0..5 {
        g.add_default_node(i).unwrap();
    }
    g.add_edge(0, 1, 200).unwrap();
    g.add_edge(1, 2, 100).unwrap();
    g.add_edge(0, 3, 250).unwrap();
    g.add_edge(3, 4, 5).unwrap();
    g.add_edge(1, 4, 60).unwrap();

    for queue in ALL_QUEUES {
        let result = compute_with(&g, 0, None, queue).unwrap();

        assert_eq!(Some(Distance::Finite(200)), result.distance(1));
        // 200 + 100 does not fit into u8
        assert_eq!(Some(Distance::Infinite), result.distance(2));
        assert_eq!(None, result.predecessor(2));
        assert_eq!(None, result.path_to(2));
        // 0 -> 1 -> 4 overflows as well, 0 -> 3 -> 4 fits exactly
        assert_eq!(Some(Distance::Finite(255)), result.distance(4));
        assert_eq!(Some(vec![0, 3, 4]), result.path_to(4));
    }
}

#[test]
fn weights_near_type_maximum() {
    let mut g: Graph<(), u32> = Graph::new();
    for i in 0..3 {
        g.add_default_node(i).unwrap();
    }
    g.add_edge(0, 1, u32::MAX).unwrap();
    g.add_edge(1, 2, 1).unwrap();

    let result = compute(&g, 0, 2).unwrap();
    assert_eq!(Some(Distance::Finite(u32::MAX)), result.distance(1));
    assert_eq!(Some(Distance::Infinite), result.distance(2));
    assert_eq!(vec![2], path::reconstruct(&result.predecessors, 0, 2));
}
