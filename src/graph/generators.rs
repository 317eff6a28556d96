use crate::graph::{DirectedEdge, EdgeWeightedDigraph, MutableGraph};
use rand::Rng;

/// Generates a random digraph with `n` vertices and `m` edges whose weights
/// are drawn uniformly from `[0, max_weight)`
///
/// Self-loops and parallel edges may appear; the engine handles both.
pub fn generate_random<R: Rng>(n: usize, m: usize, max_weight: f64, rng: &mut R) -> EdgeWeightedDigraph<f64> {
    assert!(n > 0, "n must be positive");
    assert!(max_weight > 0.0, "max_weight must be positive");

    let mut graph = EdgeWeightedDigraph::new(n);
    for _ in 0..m {
        let from = rng.gen_range(0..n);
        let to = rng.gen_range(0..n);
        let weight = rng.gen_range(0.0..max_weight);
        graph
            .add_edge(DirectedEdge::new(from, to, weight))
            .expect("endpoints in range");
    }

    graph
}

/// Generates a `width * height` grid with edges in both directions between
/// 4-neighbours, each with a random weight in `[1, max_weight)`
pub fn generate_grid<R: Rng>(width: usize, height: usize, max_weight: f64, rng: &mut R) -> EdgeWeightedDigraph<f64> {
    assert!(max_weight > 1.0, "max_weight must exceed 1");

    let mut graph = EdgeWeightedDigraph::new(width * height);

    // Helper function to get vertex index from 2D coordinates
    let index = |x: usize, y: usize| -> usize { y * width + x };

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            let mut neighbours = Vec::with_capacity(4);
            if x > 0 {
                neighbours.push(index(x - 1, y));
            }
            if x + 1 < width {
                neighbours.push(index(x + 1, y));
            }
            if y > 0 {
                neighbours.push(index(x, y - 1));
            }
            if y + 1 < height {
                neighbours.push(index(x, y + 1));
            }

            for neighbour in neighbours {
                let weight = rng.gen_range(1.0..max_weight);
                graph
                    .add_edge(DirectedEdge::new(current, neighbour, weight))
                    .expect("endpoints in range");
            }
        }
    }

    graph
}
