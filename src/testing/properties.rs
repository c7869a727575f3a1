use super::random_graphs::{path, random_edges, random_forest, random_tree};
use crate::Graph;
use crate::config::{Descent, GraphConfig};
use crate::types::Edge;
use petgraph::{Directed, Undirected};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Bridges by definition: drop each edge and see if components grow.
fn brute_force_bridges(n: usize, edges: &[Edge]) -> Vec<Edge> {
    let g: Graph = Graph::new(n, edges, false);
    let base = g.connected_component_count();
    let mut bridges: Vec<Edge> = g
        .edges()
        .filter(|&e| {
            let rest: Vec<Edge> = g.edges().filter(|&f| f != e).collect();
            let h: Graph = Graph::new(n, &rest, false);
            h.connected_component_count() > base
        })
        .collect();
    bridges.sort();
    bridges
}

#[test]
fn test_generators_are_seeded() {
    assert_eq!(random_edges(10, 20, 7), random_edges(10, 20, 7));
    assert_eq!(random_tree(10, 3).len(), 9);
    assert_eq!(random_forest(10, 4, 3).len(), 5);
    assert!(random_edges(5, 50, 1).iter().all(|&(s, t)| s != t));
}

#[test]
fn test_reachable_everywhere_iff_connected() {
    for seed in 0..40 {
        let n = 12;
        let g: Graph = Graph::new(n, &random_edges(n, 12, seed), false);
        let everywhere = (0..n).all(|v| g.reachable_from(v));
        assert_eq!(everywhere, g.connected_component_count() == 1, "seed {}", seed);
    }
}

#[test]
fn test_component_count_matches_petgraph() {
    for seed in 0..40 {
        let n = 15;
        let g: Graph = Graph::new(n, &random_edges(n, 10, seed), false);
        let pg = g.to_petgraph::<Undirected>();
        assert_eq!(
            g.connected_component_count(),
            petgraph::algo::connected_components(&pg),
            "seed {}",
            seed
        );
        let labels = g.components();
        assert_eq!(labels.iter().max().map_or(0, |m| m + 1), g.connected_component_count());
    }
}

#[test]
fn test_random_trees_and_forests() {
    for seed in 0..30 {
        let n = 20;
        let tree: Graph = Graph::new(n, &random_tree(n, seed), false);
        assert!(tree.is_tree());
        assert!(tree.is_forest());
        assert_eq!(tree.connected_component_count(), 1);
        assert_eq!(tree.critical_edges().len(), n - 1);

        let forest: Graph = Graph::new(n, &random_forest(n, 4, seed), false);
        assert!(forest.is_forest());
        assert!(!forest.is_tree());
        assert_eq!(forest.num_edges() + forest.connected_component_count(), n);
    }
}

#[test]
fn test_tree_plus_edge_is_not_a_forest() {
    for seed in 0..30 {
        let n = 10;
        let mut edges = random_tree(n, seed);
        // any extra edge between distinct vertices of a tree closes a cycle
        let extra = random_edges(n, 1, seed)[0];
        if edges.iter().any(|&(a, b)| (a, b) == extra || (b, a) == extra) {
            continue;
        }
        edges.push(extra);
        let g: Graph = Graph::new(n, &edges, false);
        assert!(!g.is_forest(), "seed {}", seed);
        assert!(!g.is_tree(), "seed {}", seed);
    }
}

#[test]
fn test_bridges_match_definition() {
    for seed in 0..40 {
        let n = 10;
        let edges = random_edges(n, 11, seed);
        let g: Graph = Graph::new(n, &edges, false);
        assert_eq!(g.critical_edges(), brute_force_bridges(n, &edges), "seed {}", seed);
    }
}

#[test]
fn test_bridges_survive_relabeling() {
    for seed in 0..20 {
        let n = 12;
        let edges = random_edges(n, 14, seed);
        let mut perm: Vec<usize> = (0..n).collect();
        perm.shuffle(&mut StdRng::seed_from_u64(seed));

        let relabeled: Vec<Edge> = edges.iter().map(|&(u, v)| (perm[u], perm[v])).collect();
        let g: Graph = Graph::new(n, &edges, false);
        let h: Graph = Graph::new(n, &relabeled, false);

        let mut expected: Vec<Edge> = g
            .critical_edges()
            .into_iter()
            .map(|(u, v)| (perm[u].min(perm[v]), perm[u].max(perm[v])))
            .collect();
        expected.sort();
        assert_eq!(h.critical_edges(), expected, "seed {}", seed);
    }
}

#[test]
fn test_directed_cycle_matches_petgraph() {
    for seed in 0..60 {
        let n = 8;
        let g: Graph = Graph::new(n, &random_edges(n, 9, seed), true);
        let pg = g.to_petgraph::<Directed>();
        assert_eq!(
            g.has_directed_cycle(),
            petgraph::algo::is_cyclic_directed(&pg),
            "seed {}",
            seed
        );
    }
}

#[test]
fn test_forward_arcs_are_acyclic() {
    for seed in 0..20 {
        let n = 15;
        let forward: Vec<Edge> = random_edges(n, 40, seed)
            .into_iter()
            .map(|(u, v)| (u.min(v), u.max(v)))
            .collect();
        let g: Graph = Graph::new(n, &forward, true);
        assert!(!g.has_directed_cycle(), "seed {}", seed);
    }
}

#[test]
fn test_descents_agree_on_random_graphs() {
    let recursive = GraphConfig::default().with_descent(Descent::Recursive);
    for seed in 0..20 {
        let n = 16;
        let edges = random_edges(n, 20, seed);
        for directed in [false, true] {
            let a: Graph = Graph::with_config(n, &edges, directed, recursive);
            let b: Graph = Graph::new(n, &edges, directed);
            assert_eq!(a.dfs_num(), b.dfs_num(), "seed {}", seed);
            if !directed {
                assert_eq!(a.low_link_num().low, b.low_link_num().low, "seed {}", seed);
                assert_eq!(a.critical_edges(), b.critical_edges(), "seed {}", seed);
            }
        }
    }
}

#[test]
fn test_queries_are_idempotent() {
    let g: Graph = Graph::new(12, &random_edges(12, 13, 99), false);
    assert_eq!(g.dfs_num(), g.dfs_num());
    assert_eq!(g.critical_edges(), g.critical_edges());
    assert_eq!(g.is_forest(), g.is_forest());
    assert_eq!(g.connected_component_count(), g.connected_component_count());
}

#[test]
fn test_deep_path_does_not_overflow() {
    let n = 100_000;
    let g: Graph = Graph::new(n, &path(n), false);
    let timestamps = g.dfs_num();
    assert_eq!(timestamps[0].as_pair(), (0, 2 * n - 1));
    assert_eq!(timestamps[n - 1].as_pair(), (n - 1, n));
    assert!(g.is_tree());
    assert_eq!(g.critical_edges().len(), n - 1);

    let d: Graph = Graph::new(n, &path(n), true);
    assert!(!d.has_directed_cycle());
}
