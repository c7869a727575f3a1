use crate::config::GraphConfig;
use crate::error::{GraphError, Result};
use crate::types::{Edge, Vertex};
use hashbrown::HashMap;

/// Graph over the dense vertex range `0..vertex_count` with immutable topology.
///
/// Every vertex keeps the *set* of its outgoing neighbours, sorted by id.
/// An undirected edge `(u, v)` is stored as the two arcs `u -> v` and `v -> u`.
/// Duplicate input edges coalesce into one arc.
///
/// `V` and `E` are optional payloads, see `mod augment`.
#[derive(Debug, Clone)]
pub struct Graph<V = (), E = ()> {
    vertex_count: usize,
    directed: bool,
    adjacency: Vec<Vec<Vertex>>,
    arc_count: usize,
    config: GraphConfig,
    pub(crate) vertex_payload: Vec<V>,
    pub(crate) edge_payload: HashMap<Edge, E>,
}

impl<V: Default, E> Graph<V, E> {
    /// Builds a graph.
    ///
    /// # Panics
    ///
    /// When `vertex_count` is zero, an edge is a self-loop or an endpoint is out of range.
    /// Use [`Graph::try_new`] to get these as a [`GraphError`] instead.
    pub fn new(vertex_count: usize, edges: &[Edge], directed: bool) -> Self {
        Self::with_config(vertex_count, edges, directed, GraphConfig::default())
    }

    pub fn with_config(
        vertex_count: usize,
        edges: &[Edge],
        directed: bool,
        config: GraphConfig,
    ) -> Self {
        match Self::try_with_config(vertex_count, edges, directed, config) {
            Ok(graph) => graph,
            Err(err) => panic!("{}", err),
        }
    }

    /// This is equivalent to [`Graph::new`], but reports bad input as an error.
    pub fn try_new(vertex_count: usize, edges: &[Edge], directed: bool) -> Result<Self> {
        Self::try_with_config(vertex_count, edges, directed, GraphConfig::default())
    }

    pub fn try_with_config(
        vertex_count: usize,
        edges: &[Edge],
        directed: bool,
        config: GraphConfig,
    ) -> Result<Self> {
        if vertex_count == 0 {
            return Err(GraphError::EmptyGraph);
        }

        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(u, v) in edges {
            // range first, so (9, 9) on 3 vertices reports the bad id
            for w in [u, v] {
                if w >= vertex_count {
                    return Err(GraphError::VertexOutOfRange { vertex: w, vertex_count });
                }
            }
            if u == v {
                return Err(GraphError::SelfLoop { vertex: u });
            }

            adjacency[u].push(v);
            if !directed {
                adjacency[v].push(u);
            }
        }

        let mut arc_count = 0;
        for neighbors in adjacency.iter_mut() {
            radsort::sort(neighbors);
            neighbors.dedup();
            arc_count += neighbors.len();
        }

        tracing::trace!(vertex_count, arc_count, directed, "graph built");

        Ok(Self {
            vertex_count,
            directed,
            adjacency,
            arc_count,
            config,
            vertex_payload: (0..vertex_count).map(|_| V::default()).collect(),
            edge_payload: HashMap::new(),
        })
    }
}

impl<V, E> Graph<V, E> {
    pub fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Outgoing neighbours of `u`, in ascending order.
    pub fn neighbors(&self, u: Vertex) -> &[Vertex] {
        self.require_vertex(u);
        &self.adjacency[u]
    }

    pub fn has_vertex(&self, u: Vertex) -> bool {
        u < self.vertex_count
    }

    /// Returns true if the arc `u -> v` is stored. For undirected graphs this
    /// holds in both directions for every edge.
    pub fn has_arc(&self, u: Vertex, v: Vertex) -> bool {
        self.has_vertex(u) && self.adjacency[u].binary_search(&v).is_ok()
    }

    /// Number of edges. Undirected edges are stored twice but counted once.
    pub fn num_edges(&self) -> usize {
        if self.directed {
            self.arc_count
        } else {
            self.arc_count / 2
        }
    }

    /// All stored arcs in ascending `(u, v)` order.
    pub fn arcs(&self) -> impl Iterator<Item = Edge> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(u, neighbors)| neighbors.iter().map(move |&v| (u, v)))
    }

    /// Every edge once. Undirected edges come out as `(lower id, higher id)`.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let directed = self.directed;
        self.arcs().filter(move |&(u, v)| directed || u < v)
    }

    pub(crate) fn require_vertex(&self, u: Vertex) {
        if !self.has_vertex(u) {
            panic!(
                "{}",
                GraphError::VertexOutOfRange { vertex: u, vertex_count: self.vertex_count }
            );
        }
    }

    pub(crate) fn require_directed(&self, operation: &'static str) {
        if !self.directed {
            panic!(
                "{}",
                GraphError::DirectednessMismatch { operation, required: "directed" }
            );
        }
    }

    pub(crate) fn require_undirected(&self, operation: &'static str) {
        if self.directed {
            panic!(
                "{}",
                GraphError::DirectednessMismatch { operation, required: "undirected" }
            );
        }
    }
}
