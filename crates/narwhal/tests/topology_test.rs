use narwhal::{Error, Graph, GraphOptions};

fn depths(g: &Graph<&'static str>) -> Vec<(&'static str, usize)> {
    let map = g.topology_depths().unwrap();
    g.keyed_by_value(&map).into_iter().collect()
}

#[test]
fn chain_depth_counts_nodes_to_the_sink() {
    let g = Graph::from_edges(GraphOptions { directed: true }, [("a", "b"), ("b", "c")]);
    assert_eq!(depths(&g), vec![("a", 3), ("b", 2), ("c", 1)]);
}

#[test]
fn diamond_uses_the_longest_branch() {
    let g = Graph::from_edges(
        GraphOptions { directed: true },
        [("a", "b"), ("b", "d"), ("a", "c"), ("c", "e"), ("e", "d")],
    );
    assert_eq!(
        depths(&g),
        vec![("a", 4), ("b", 2), ("d", 1), ("c", 3), ("e", 2)]
    );
}

#[test]
fn independent_components_are_ranked_separately() {
    let g = Graph::from_edges(
        GraphOptions { directed: true },
        [("x", "y"), ("p", "q"), ("q", "r")],
    );
    assert_eq!(
        depths(&g),
        vec![("x", 2), ("y", 1), ("p", 3), ("q", 2), ("r", 1)]
    );
}

#[test]
fn every_edge_steps_down_at_least_one_level() {
    let g = Graph::from_edges(
        GraphOptions { directed: true },
        [("s", "a"), ("s", "b"), ("a", "b"), ("b", "t"), ("a", "t"), ("s", "t")],
    );
    let map = g.topology_depths().unwrap();
    for (_, e) in g.edges() {
        assert!(map[&e.from()] >= map[&e.to()] + 1);
    }
    assert_eq!(map[&g.node_id(&"t").unwrap()], 1);
}

#[test]
fn undirected_graphs_use_the_stored_edge_order() {
    let g = Graph::from_edges(GraphOptions { directed: false }, [("a", "b"), ("c", "b")]);
    assert_eq!(depths(&g), vec![("a", 2), ("b", 1), ("c", 2)]);
}

#[test]
fn cycles_are_reported() {
    let g: Graph<&str> = Graph::from_edges(
        GraphOptions { directed: true },
        [("a", "b"), ("b", "c"), ("c", "a")],
    );
    assert!(matches!(g.topology_depths(), Err(Error::Cycle { .. })));
}

#[test]
fn self_loops_are_cycles() {
    let g: Graph<&str> =
        Graph::from_edges(GraphOptions { directed: true }, [("a", "b"), ("b", "b")]);
    assert_eq!(
        g.topology_depths(),
        Err(Error::Cycle {
            node: g.node_id(&"b").unwrap()
        })
    );
}

#[test]
fn long_chains_do_not_exhaust_the_stack() {
    let n: u32 = 200_000;
    let g: Graph<u32> =
        Graph::from_edges(GraphOptions { directed: true }, (0..n).map(|i| (i, i + 1)));
    let map = g.topology_depths().unwrap();
    assert_eq!(map[&g.node_id(&0).unwrap()], n as usize + 1);
    assert_eq!(map[&g.node_id(&n).unwrap()], 1);
}

#[test]
fn empty_graph_yields_an_empty_map() {
    let g: Graph<&str> = Graph::directed();
    assert!(g.topology_depths().unwrap().is_empty());
}
