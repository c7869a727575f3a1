//! Depth-first search primitives shared by the numbering algorithms and queries.

use crate::Graph;
use crate::types::{Timestamps, Vertex};
use fixedbitset::FixedBitSet;

/// Marks in `seen` every vertex reachable from `source`, `source` included.
///
/// Returns whether `source` was already seen when called. The same `seen`
/// buffer can be passed to many calls to accumulate reachability, which is how
/// components are counted. A buffer shorter than `vertex_count` is grown.
///
/// Uses an explicit stack, so depth is not limited by the call stack.
///
/// # Panics
///
/// When `source` is out of range.
pub fn mark_reachable<V, E>(graph: &Graph<V, E>, seen: &mut FixedBitSet, source: Vertex) -> bool {
    reach_with(graph, seen, source, |_| {})
}

/// [`mark_reachable`] that also hands every newly seen vertex to `on_reach`,
/// so callers can label vertices without rescanning `seen`.
pub(crate) fn reach_with<V, E>(
    graph: &Graph<V, E>,
    seen: &mut FixedBitSet,
    source: Vertex,
    mut on_reach: impl FnMut(Vertex),
) -> bool {
    graph.require_vertex(source);
    seen.grow(graph.vertex_count());
    if seen.put(source) {
        return true;
    }
    on_reach(source);

    let mut stack = vec![source];
    while let Some(u) = stack.pop() {
        for &v in graph.neighbors(u) {
            if !seen.put(v) {
                on_reach(v);
                stack.push(v);
            }
        }
    }

    false
}

/// Assigns visit and finish times to everything reachable from `root` that is
/// not seen yet, by natural recursion.
///
/// `clock` is advanced by one on every visit and every finish, so the intervals
/// nest like the DFS tree. Already seen vertices are left untouched.
pub fn timestamp_recursive<V, E>(
    graph: &Graph<V, E>,
    root: Vertex,
    seen: &mut FixedBitSet,
    clock: &mut usize,
    out: &mut [Timestamps],
) {
    if seen.put(root) {
        return;
    }
    out[root].visit = *clock;
    *clock += 1;

    for &v in graph.neighbors(root) {
        timestamp_recursive(graph, v, seen, clock, out);
    }

    out[root].finish = *clock;
    *clock += 1;
}

/// Same numbering as [`timestamp_recursive`], with an explicit stack of
/// `(vertex, position of the next neighbour to try)` frames.
pub fn timestamp_iterative<V, E>(
    graph: &Graph<V, E>,
    root: Vertex,
    seen: &mut FixedBitSet,
    clock: &mut usize,
    out: &mut [Timestamps],
) {
    if seen.put(root) {
        return;
    }
    out[root].visit = *clock;
    *clock += 1;

    let mut stack: Vec<(Vertex, usize)> = vec![(root, 0)];
    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        let neighbors = graph.neighbors(u);

        if next == neighbors.len() {
            out[u].finish = *clock;
            *clock += 1;
            stack.pop();
            continue;
        }

        frame.1 += 1;
        let v = neighbors[next];
        if !seen.put(v) {
            out[v].visit = *clock;
            *clock += 1;
            stack.push((v, 0));
        }
    }
}
