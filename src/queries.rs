//! Structural queries built from the traversal engine and the two numberings.

use crate::Graph;
use crate::traversal::{mark_reachable, reach_with};
use crate::types::{Edge, Vertex};
use fixedbitset::FixedBitSet;

impl<V, E> Graph<V, E> {
    /// Returns true if every vertex is reachable from `source`.
    ///
    /// # Panics
    ///
    /// When `source` is out of range.
    pub fn reachable_from(&self, source: Vertex) -> bool {
        self.reachable_set(source).count_ones(..) == self.vertex_count()
    }

    /// Vertices reachable from `source`, `source` included.
    pub fn reachable_set(&self, source: Vertex) -> FixedBitSet {
        self.require_vertex(source);
        let mut seen = FixedBitSet::with_capacity(self.vertex_count());
        mark_reachable(self, &mut seen, source);
        seen
    }

    /// Number of connected components. Undirected graphs only.
    pub fn connected_component_count(&self) -> usize {
        self.require_undirected("connected_component_count");
        let mut seen = FixedBitSet::with_capacity(self.vertex_count());
        (0..self.vertex_count())
            .filter(|&u| !mark_reachable(self, &mut seen, u))
            .count()
    }

    /// Component label of every vertex. Labels are `0..k`, in order of the
    /// smallest vertex of each component. Undirected graphs only.
    pub fn components(&self) -> Vec<usize> {
        self.require_undirected("components");
        let n = self.vertex_count();
        let mut seen = FixedBitSet::with_capacity(n);
        let mut labels = vec![usize::MAX; n];
        let mut count = 0;

        for u in 0..n {
            if !reach_with(self, &mut seen, u, |v| labels[v] = count) {
                count += 1;
            }
        }

        labels
    }

    /// Returns true if some arc `u -> v` is a back edge of the DFS forest, i.e.
    /// `v`'s interval contains `u`'s. Directed graphs only.
    pub fn has_directed_cycle(&self) -> bool {
        self.require_directed("has_directed_cycle");
        let timestamps = self.dfs_num();
        let back_edge = self
            .arcs()
            .find(|&(u, v)| timestamps[v].contains(&timestamps[u]));

        if let Some((u, v)) = back_edge {
            tracing::trace!(u, v, "back edge closes a directed cycle");
        }
        back_edge.is_some()
    }

    /// Finds all critical edges (bridges): edges whose removal increases the
    /// number of connected components. Undirected graphs only.
    ///
    /// Each bridge is reported once as `(lower id, higher id)`, sorted ascending.
    pub fn critical_edges(&self) -> Vec<Edge> {
        self.require_undirected("critical_edges");
        let bridges = self.low_link_num().bridges();
        tracing::trace!(count = bridges.len(), "critical edges found");
        bridges
    }

    pub fn has_critical_edge(&self) -> bool {
        !self.critical_edges().is_empty()
    }

    /// Returns true if the graph is connected and has exactly `n - 1` edges.
    /// Undirected graphs only.
    pub fn is_tree(&self) -> bool {
        self.require_undirected("is_tree");
        self.reachable_from(0) && self.num_edges() + 1 == self.vertex_count()
    }

    /// Returns true if every component is a tree, i.e. edges plus components
    /// equal vertices. Undirected graphs only.
    pub fn is_forest(&self) -> bool {
        self.require_undirected("is_forest");
        self.num_edges() + self.connected_component_count() == self.vertex_count()
    }
}
