use rand::prelude::*;
use rand::rngs::StdRng;
use route_graph::graph::generators::{generate_geometric, vertex_name};
use route_graph::graph::Graph;
use route_graph::{GeoPoint, UndirectedGraph};
use std::time::{Duration, Instant};

// Random source/destination pairs drawn from the generated vertex names
fn random_pairs(vertex_count: usize, queries: usize, seed: u64) -> Vec<(String, String)> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..queries)
        .map(|_| {
            (
                vertex_name(rng.gen_range(0..vertex_count)),
                vertex_name(rng.gen_range(0..vertex_count)),
            )
        })
        .collect()
}

// Runs every query one after another and returns (elapsed, routes found)
fn run_sequential(graph: &UndirectedGraph<GeoPoint>, pairs: &[(String, String)]) -> (Duration, usize) {
    let start = Instant::now();
    let found = pairs
        .iter()
        .filter(|(source, destination)| graph.route(source, destination).is_some())
        .count();
    (start.elapsed(), found)
}

fn run_parallel(graph: &UndirectedGraph<GeoPoint>, pairs: &[(String, String)]) -> (Duration, usize) {
    let start = Instant::now();
    let found = graph
        .routes_parallel(pairs)
        .iter()
        .filter(|route| route.is_some())
        .count();
    (start.elapsed(), found)
}

fn main() {
    env_logger::init();

    // Graph sizes to test
    let graph_sizes = vec![500, 2_000, 5_000];
    let queries = 200;
    // Mumbai, where the delivery venues live
    let center = GeoPoint::new(19.1970, 72.8200);

    println!("=====================================================");
    println!("Benchmark: sequential vs parallel route queries");
    println!("{} queries per graph", queries);
    println!("=====================================================");

    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating geometric graph with {} vertices...", size);
        let graph = generate_geometric(size, center, 0.2, 2.5, size as u64);
        println!(
            "Graph has {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        let pairs = random_pairs(size, queries, 42);
        let (sequential_time, sequential_found) = run_sequential(&graph, &pairs);
        let (parallel_time, parallel_found) = run_parallel(&graph, &pairs);

        if sequential_found != parallel_found {
            eprintln!(
                "  ! result mismatch: sequential found {}, parallel found {}",
                sequential_found, parallel_found
            );
        }
        println!(
            "  - {} of {} routes found; sequential {:?}, parallel {:?}",
            sequential_found, queries, sequential_time, parallel_time
        );

        results.push((size, graph.edge_count(), sequential_time, parallel_time));
    }

    // Print summary table
    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<10} | {:<15} | {:<15} | {:<10}",
        "Vertices", "Edges", "Sequential (ms)", "Parallel (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, edges, sequential_time, parallel_time) in &results {
        let speedup = sequential_time.as_secs_f64() / parallel_time.as_secs_f64().max(f64::EPSILON);
        println!(
            "{:<10} | {:<10} | {:<15} | {:<15} | {:<10.2}",
            size,
            edges,
            sequential_time.as_millis(),
            parallel_time.as_millis(),
            speedup
        );
    }
}
