//! Prints the DFS numbering and the low-link numbering of a small graph.
//! I use it with `cargo run --example numbering | dot -Tsvg > numbering.svg`

use dfs_graphs::Graph;
use dfs_graphs::debugging::{draw_dfs_numbering, draw_low_link};

fn main() {
    let graph: Graph = Graph::new(6, &[(0, 1), (1, 2), (3, 1), (3, 4), (5, 2), (2, 3)], false);

    print!("{}", draw_dfs_numbering(&graph));
    print!("{}", draw_low_link(&graph));
}
