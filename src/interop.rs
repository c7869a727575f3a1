//! Conversions to and from [`petgraph`](https://docs.rs/petgraph) graphs.
//!
//! Vertex `i` always corresponds to petgraph's node index `i`.

use crate::Graph;
use crate::error::Result;
use crate::types::{Edge, Vertex};
use petgraph::EdgeType;
use petgraph::graph::{Graph as PetGraph, IndexType, NodeIndex};
use petgraph::visit::EdgeRef;

impl<V: Default, E> Graph<V, E> {
    /// Builds a graph with the topology of a petgraph graph.
    ///
    /// Directedness is taken from `Ty`. Weights are dropped; parallel edges
    /// coalesce. Self-loops are rejected like in [`Graph::try_new`].
    pub fn from_petgraph<N, W, Ty: EdgeType, Ix: IndexType>(
        graph: &PetGraph<N, W, Ty, Ix>,
    ) -> Result<Self> {
        let edges: Vec<Edge> = graph
            .edge_references()
            .map(|e| (e.source().index(), e.target().index()))
            .collect();
        Self::try_new(graph.node_count(), &edges, Ty::is_directed())
    }
}

impl<V, E> Graph<V, E> {
    /// Copies the topology into a petgraph graph whose node weights are the
    /// vertex ids. Each edge is added once.
    ///
    /// # Panics
    ///
    /// When `Ty` does not match the directedness of this graph.
    pub fn to_petgraph<Ty: EdgeType>(&self) -> PetGraph<Vertex, (), Ty> {
        if Ty::is_directed() {
            self.require_directed("to_petgraph::<Directed>");
        } else {
            self.require_undirected("to_petgraph::<Undirected>");
        }

        let mut graph = PetGraph::with_capacity(self.vertex_count(), self.num_edges());
        for u in 0..self.vertex_count() {
            graph.add_node(u);
        }
        for (u, v) in self.edges() {
            graph.add_edge(NodeIndex::new(u), NodeIndex::new(v), ());
        }
        graph
    }
}
