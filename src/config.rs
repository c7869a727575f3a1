//! Per-graph configuration.

/// Which depth-first descent the numbering algorithms run.
///
/// Both produce the same numbering. The recursive one is bounded by the call
/// stack, so deep graphs should use the iterative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Descent {
    Recursive,
    #[default]
    Iterative,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphConfig {
    /// Log per-vertex numbering values at `debug` level.
    pub verbose: bool,
    pub descent: Descent,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            verbose: false,
            descent: Descent::Iterative,
        }
    }
}

impl GraphConfig {
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    pub fn with_descent(mut self, descent: Descent) -> Self {
        self.descent = descent;
        self
    }
}
