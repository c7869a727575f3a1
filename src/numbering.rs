use crate::Graph;
use crate::config::Descent;
use crate::traversal::{timestamp_iterative, timestamp_recursive};
use crate::types::Timestamps;
use fixedbitset::FixedBitSet;

impl<V, E> Graph<V, E> {
    /// Computes visit/finish timestamps of all vertices.
    ///
    /// The search is started from every vertex `0..n` in turn, skipping the ones
    /// already visited, so disconnected graphs are fully numbered. The clock
    /// starts at 0 and ticks on every visit and every finish.
    ///
    /// The i-th entry belongs to vertex i. Nothing is cached; every call runs a
    /// fresh search.
    pub fn dfs_num(&self) -> Vec<Timestamps> {
        let n = self.vertex_count();
        let mut seen = FixedBitSet::with_capacity(n);
        let mut clock = 0;
        let mut timestamps = vec![Timestamps::default(); n];

        for root in 0..n {
            match self.config().descent {
                Descent::Recursive => {
                    timestamp_recursive(self, root, &mut seen, &mut clock, &mut timestamps)
                }
                Descent::Iterative => {
                    timestamp_iterative(self, root, &mut seen, &mut clock, &mut timestamps)
                }
            }
        }

        if self.config().verbose {
            for (u, ts) in timestamps.iter().enumerate() {
                tracing::debug!(vertex = u, visit = ts.visit, finish = ts.finish, "dfs numbering");
            }
        }

        timestamps
    }
}
