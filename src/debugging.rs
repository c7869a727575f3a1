//! DOT renderings of the numberings, for looking at what a search did.
//!
//! I use them with `cargo run --example numbering | dot -Tsvg > numbering.svg`.

use crate::Graph;
use crate::types::Vertex;
use dot::{Edges, GraphWalk, Labeller, Nodes};

#[derive(Clone)]
struct DrawnEdge {
    source: Vertex,
    target: Vertex,
    style: dot::Style,
    highlight: bool,
}

struct Drawing {
    nodes: Vec<Vertex>,
    labels: Vec<String>,
    edges: Vec<DrawnEdge>,
    kind: dot::Kind,
}

impl<'a> Labeller<'a, Vertex, DrawnEdge> for Drawing {
    fn graph_id(&self) -> dot::Id<'_> {
        dot::Id::new("G").unwrap()
    }

    fn node_id(&self, n: &Vertex) -> dot::Id<'_> {
        dot::Id::new(format!("N{}", n)).unwrap()
    }

    fn node_label(&self, n: &Vertex) -> dot::LabelText<'a> {
        dot::LabelText::label(self.labels[*n].clone())
    }

    fn edge_label(&self, _: &DrawnEdge) -> dot::LabelText<'a> {
        dot::LabelText::label("")
    }

    fn edge_style(&'a self, e: &DrawnEdge) -> dot::Style {
        e.style
    }

    fn edge_color(&'a self, e: &DrawnEdge) -> Option<dot::LabelText<'a>> {
        if e.highlight {
            Some(dot::LabelText::label("red"))
        } else {
            None
        }
    }

    fn kind(&self) -> dot::Kind {
        self.kind
    }
}

impl<'a> GraphWalk<'a, Vertex, DrawnEdge> for Drawing {
    fn nodes(&self) -> Nodes<'_, Vertex> {
        self.nodes.iter().cloned().collect()
    }

    fn edges(&self) -> Edges<'_, DrawnEdge> {
        self.edges.as_slice().into()
    }

    fn source(&self, e: &DrawnEdge) -> Vertex {
        e.source
    }

    fn target(&self, e: &DrawnEdge) -> Vertex {
        e.target
    }
}

impl Drawing {
    fn new<V, E>(graph: &Graph<V, E>, labels: Vec<String>) -> Self {
        Self {
            nodes: (0..graph.vertex_count()).collect(),
            labels,
            edges: Vec::with_capacity(graph.num_edges()),
            kind: if graph.is_directed() {
                dot::Kind::Digraph
            } else {
                dot::Kind::Graph
            },
        }
    }

    fn render(&self) -> String {
        let mut buffer = std::io::Cursor::new(Vec::new());
        dot::render(self, &mut buffer).expect("Writing DOT to memory should not fail");
        String::from_utf8(buffer.into_inner()).expect("DOT output should be valid UTF-8")
    }
}

/// Returns the graph in DOT format with every vertex labelled by its
/// `(visit, finish)` timestamps.
///
/// In directed graphs back edges (the ones closing a cycle) are dotted and red.
pub fn draw_dfs_numbering<V, E>(graph: &Graph<V, E>) -> String {
    let timestamps = graph.dfs_num();
    let labels = timestamps
        .iter()
        .enumerate()
        .map(|(u, ts)| format!("{}\n{}", u, ts))
        .collect();

    let mut drawing = Drawing::new(graph, labels);
    for (u, v) in graph.edges() {
        let back = graph.is_directed() && timestamps[v].contains(&timestamps[u]);
        drawing.edges.push(DrawnEdge {
            source: u,
            target: v,
            style: if back { dot::Style::Dotted } else { dot::Style::None },
            highlight: back,
        });
    }

    drawing.render()
}

/// Returns the graph in DOT format with every vertex labelled by its visit
/// order and low-link.
///
/// Tree edges are solid, back edges are dotted, bridges are red.
///
/// # Panics
///
/// On directed graphs.
pub fn draw_low_link<V, E>(graph: &Graph<V, E>) -> String {
    let low_link = graph.low_link_num();
    let labels = (0..graph.vertex_count())
        .map(|u| format!("{}\nvisit:{} low:{}", u, low_link.visit[u], low_link.low[u]))
        .collect();

    let mut drawing = Drawing::new(graph, labels);
    for (u, v) in graph.edges() {
        let child = if low_link.parent[v] == Some(u) {
            Some(v)
        } else if low_link.parent[u] == Some(v) {
            Some(u)
        } else {
            None
        };

        drawing.edges.push(DrawnEdge {
            source: u,
            target: v,
            style: if child.is_some() { dot::Style::None } else { dot::Style::Dotted },
            highlight: child.is_some_and(|c| low_link.is_bridge_into(c)),
        });
    }

    drawing.render()
}
