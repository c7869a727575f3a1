/// Vertex identifier. Vertices always form the dense range `0..vertex_count`.
pub type Vertex = usize;

/// An edge given by its two endpoints.
pub type Edge = (Vertex, Vertex);

/// Visit and finish clock values of a single vertex in a depth-first search.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
pub struct Timestamps {
    pub visit: usize,
    pub finish: usize,
}

impl Timestamps {
    pub fn new(visit: usize, finish: usize) -> Self {
        Self { visit, finish }
    }

    /// Returns true if `other`'s interval lies inside this one, i.e. this vertex
    /// is an ancestor of `other` (or the same vertex) in the DFS forest.
    pub fn contains(&self, other: &Timestamps) -> bool {
        self.visit <= other.visit && other.finish <= self.finish
    }

    pub fn as_pair(&self) -> (usize, usize) {
        (self.visit, self.finish)
    }
}

impl From<(usize, usize)> for Timestamps {
    fn from((visit, finish): (usize, usize)) -> Self {
        Self { visit, finish }
    }
}

impl std::fmt::Display for Timestamps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.visit, self.finish)
    }
}
