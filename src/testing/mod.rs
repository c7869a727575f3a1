pub mod random_graphs;

mod properties;
