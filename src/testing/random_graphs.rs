use crate::types::Edge;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Edges of a random tree on `n` vertices: every vertex `i > 0` hangs off a
/// random earlier vertex.
pub fn random_tree(n: usize, seed: u64) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(seed);
    (1..n).map(|i| (rng.random_range(0..i), i)).collect()
}

/// Edges of a random forest: a random tree with `cuts` of its edges removed.
pub fn random_forest(n: usize, cuts: usize, seed: u64) -> Vec<Edge> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = random_tree(n, seed);
    for _ in 0..cuts.min(edges.len()) {
        let i = rng.random_range(0..edges.len());
        edges.swap_remove(i);
    }
    edges
}

/// `m` random edges on `n` vertices, self-loops skipped. May contain duplicates.
pub fn random_edges(n: usize, m: usize, seed: u64) -> Vec<Edge> {
    assert!(n > 1);
    let mut rng = StdRng::seed_from_u64(seed);
    let mut edges = Vec::with_capacity(m);
    while edges.len() < m {
        let s = rng.random_range(0..n);
        let t = rng.random_range(0..n);
        if s != t {
            edges.push((s, t));
        }
    }
    edges
}

/// A path `0 - 1 - ... - n-1`, the deepest possible DFS tree.
pub fn path(n: usize) -> Vec<Edge> {
    (1..n).map(|i| (i - 1, i)).collect()
}
