use crate::types::Vertex;

pub type Result<T> = std::result::Result<T, GraphError>;

/// Misuse of a [`Graph`](crate::Graph).
///
/// Construction can report these as values through
/// [`Graph::try_new`](crate::Graph::try_new). Queries treat them as programming
/// errors and panic with the message below.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GraphError {
    #[error("graph must have at least one vertex")]
    EmptyGraph,

    #[error("self-loop on vertex {vertex} is not allowed")]
    SelfLoop { vertex: Vertex },

    #[error("vertex {vertex} is out of range for a graph with {vertex_count} vertices")]
    VertexOutOfRange { vertex: Vertex, vertex_count: usize },

    #[error("`{operation}` only works for {required} graphs")]
    DirectednessMismatch {
        operation: &'static str,
        /// Either "directed" or "undirected".
        required: &'static str,
    },
}
