//! Payloads attached to vertices and ordered vertex pairs.
//!
//! Vertex payloads live in a dense vector filled with `V::default()` when the
//! graph is built. Edge payloads live in a map keyed by `(u, v)` and are created
//! on first mutable access. Neither checks that the key exists in the topology.

use crate::Graph;
use crate::types::{Edge, Vertex};

impl<V, E> Graph<V, E> {
    /// # Panics
    ///
    /// When `v` is out of range.
    pub fn vertex_data(&self, v: Vertex) -> &V {
        self.require_vertex(v);
        &self.vertex_payload[v]
    }

    pub fn vertex_data_mut(&mut self, v: Vertex) -> &mut V {
        self.require_vertex(v);
        &mut self.vertex_payload[v]
    }

    /// Payload of the ordered pair `(u, v)` if it was ever accessed mutably.
    pub fn edge_data(&self, u: Vertex, v: Vertex) -> Option<&E> {
        self.edge_payload.get(&(u, v))
    }

    /// Payload of the ordered pair `(u, v)`, created with `E::default()` if absent.
    ///
    /// `(u, v)` and `(v, u)` are different keys, even in undirected graphs.
    pub fn edge_data_mut(&mut self, u: Vertex, v: Vertex) -> &mut E
    where
        E: Default,
    {
        self.edge_payload.entry((u, v)).or_default()
    }

    pub fn vertex_payloads(&self) -> impl Iterator<Item = (Vertex, &V)> {
        self.vertex_payload.iter().enumerate()
    }

    /// Created edge payloads, in no particular order.
    pub fn edge_payloads(&self) -> impl Iterator<Item = (Edge, &E)> {
        self.edge_payload.iter().map(|(&key, data)| (key, data))
    }
}
