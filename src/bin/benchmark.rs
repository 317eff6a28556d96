use std::time::{Duration, Instant};

use dijkstra_sp::graph::generators::generate_random;
use dijkstra_sp::graph::{EdgeWeightedDigraph, Graph};
use dijkstra_sp::DijkstraSP;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

// Function to benchmark a single-source run on a graph
fn benchmark_single(graph: &EdgeWeightedDigraph<f64>, source: usize) -> Duration {
    println!("Running Dijkstra on graph with {} vertices...", graph.vertex_count());

    let start = Instant::now();
    let sp = match DijkstraSP::new(graph, source) {
        Ok(sp) => sp,
        Err(e) => {
            eprintln!("  - failed: {}", e);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    // Count reachable vertices
    let reachable = sp.distances().iter().filter(|d| d.is_finite()).count();
    println!("  - Found {} reachable vertices in {:?}", reachable, duration);

    duration
}

// Independent engines share the read-only graph; each owns its own state
fn benchmark_parallel_sources(graph: &EdgeWeightedDigraph<f64>, sources: usize) -> Duration {
    let start = Instant::now();
    let reachable: usize = (0..sources.min(graph.vertex_count()))
        .into_par_iter()
        .filter_map(|source| DijkstraSP::new(graph, source).ok())
        .map(|sp| sp.distances().iter().filter(|d| d.is_finite()).count())
        .sum();
    let duration = start.elapsed();

    println!(
        "  - {} sources in parallel: {} reachable pairs in {:?}",
        sources, reachable, duration
    );
    duration
}

fn main() {
    env_logger::init();

    // Define graph sizes to test
    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000, 200_000];
    let edge_factor = 4;
    let parallel_sources = 32;

    let mut rng = StdRng::seed_from_u64(42);

    println!("Dijkstra benchmark (edge factor {})", edge_factor);
    println!("===================================");

    for &n in &graph_sizes {
        info!("generating graph with {} vertices", n);
        let graph = generate_random(n, n * edge_factor, 100.0, &mut rng);

        let single = benchmark_single(&graph, 0);
        let parallel = benchmark_parallel_sources(&graph, parallel_sources);
        let per_source = parallel.as_secs_f64() * 1000.0 / parallel_sources as f64;

        println!(
            "  - {} vertices: single {:.2} ms, {:.2} ms per source in parallel",
            n,
            single.as_secs_f64() * 1000.0,
            per_source
        );
        println!();
    }
}
