use crate::Graph;
use crate::config::Descent;
use crate::types::Vertex;
use fixedbitset::FixedBitSet;

/// Low-link numbering of an undirected graph.
///
/// `visit[u]` is the order in which `u` was discovered (0, 1, 2, ...).
/// `low[u]` is the smallest visit order reachable from the DFS subtree of `u`
/// using tree edges and at most one back edge, never through the tree edge
/// between `u` and its parent.
///
/// A tree edge `parent[v] - v` is a bridge iff `low[v] >= visit[v]`: nothing
/// below `v` climbs above `v`.
#[derive(Debug, Clone)]
pub struct LowLink {
    visited: FixedBitSet,
    pub visit: Vec<usize>,
    pub low: Vec<usize>,
    /// DFS parent of every vertex, `None` for roots.
    pub parent: Vec<Option<Vertex>>,
    time: usize,
    verbose: bool,
}

impl LowLink {
    fn new(graph_size: usize, verbose: bool) -> Self {
        Self {
            visited: FixedBitSet::with_capacity(graph_size),
            visit: vec![usize::MAX; graph_size],
            low: vec![usize::MAX; graph_size],
            parent: vec![None; graph_size],
            time: 0,
            verbose,
        }
    }

    /// Returns true if `v` hangs off its parent by a bridge.
    pub fn is_bridge_into(&self, v: Vertex) -> bool {
        self.parent[v].is_some() && self.low[v] >= self.visit[v]
    }

    /// All tree edges that are bridges, as `(lower id, higher id)` in ascending order.
    pub fn bridges(&self) -> Vec<(Vertex, Vertex)> {
        let mut bridges: Vec<(Vertex, Vertex)> = (0..self.visit.len())
            .filter(|&v| self.is_bridge_into(v))
            .filter_map(|v| self.parent[v].map(|p| (p.min(v), p.max(v))))
            .collect();
        // radsort is stable, so sorting by the second key first gives lexicographic order
        radsort::sort_by_key(&mut bridges, |e| e.1);
        radsort::sort_by_key(&mut bridges, |e| e.0);
        bridges
    }

    fn enter(&mut self, u: Vertex, parent: Option<Vertex>) {
        self.visited.insert(u);
        self.visit[u] = self.time;
        self.low[u] = self.time;
        self.parent[u] = parent;
        self.time += 1;
    }

    fn leave(&mut self, u: Vertex) {
        if self.verbose {
            tracing::debug!(vertex = u, visit = self.visit[u], low = self.low[u], "low-link");
        }
        if let Some(p) = self.parent[u] {
            self.low[p] = self.low[p].min(self.low[u]);
        }
    }
}

impl<V, E> Graph<V, E> {
    /// Computes the low-link numbering, starting a search at every unvisited
    /// vertex `0..n`.
    ///
    /// # Panics
    ///
    /// On directed graphs.
    pub fn low_link_num(&self) -> LowLink {
        self.require_undirected("low_link_num");
        let n = self.vertex_count();
        let mut low_link = LowLink::new(n, self.config().verbose);

        for root in 0..n {
            if low_link.visited.contains(root) {
                continue;
            }
            match self.config().descent {
                Descent::Recursive => {
                    let mut path_stack = Vec::new();
                    dfs_recursive(self, root, &mut path_stack, &mut low_link);
                }
                Descent::Iterative => dfs_iterative(self, root, &mut low_link),
            }
        }

        tracing::trace!(vertex_count = n, "low-link numbering done");
        low_link
    }
}

/// The parent is read from `path_stack` rather than passed down, and the one
/// neighbour equal to it is skipped. Adjacency is a set, so this is exactly
/// the tree edge.
fn dfs_recursive<V, E>(
    graph: &Graph<V, E>,
    u: Vertex,
    path_stack: &mut Vec<Vertex>,
    low_link: &mut LowLink,
) {
    let parent = path_stack.last().copied();
    low_link.enter(u, parent);
    path_stack.push(u);

    for &v in graph.neighbors(u) {
        if Some(v) == parent {
            continue;
        }
        if !low_link.visited.contains(v) {
            dfs_recursive(graph, v, path_stack, low_link);
        } else {
            // back edge, or the far end of one already seen from below
            low_link.low[u] = low_link.low[u].min(low_link.visit[v]);
        }
    }

    path_stack.pop();
    low_link.leave(u);
}

/// Same numbering as [`dfs_recursive`]. The frame stack doubles as the path
/// stack: the parent of the top frame is the frame below it.
fn dfs_iterative<V, E>(graph: &Graph<V, E>, root: Vertex, low_link: &mut LowLink) {
    low_link.enter(root, None);
    let mut stack: Vec<(Vertex, usize)> = vec![(root, 0)];

    while let Some(frame) = stack.last_mut() {
        let (u, next) = *frame;
        let neighbors = graph.neighbors(u);

        if next == neighbors.len() {
            stack.pop();
            low_link.leave(u);
            continue;
        }

        frame.1 += 1;
        let v = neighbors[next];
        if Some(v) == low_link.parent[u] {
            continue;
        }
        if !low_link.visited.contains(v) {
            low_link.enter(v, Some(u));
            stack.push((v, 0));
        } else {
            low_link.low[u] = low_link.low[u].min(low_link.visit[v]);
        }
    }
}
