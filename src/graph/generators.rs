use crate::geo::GeoPoint;
use crate::graph::{MutableGraph, UndirectedGraph};
use rand::prelude::*;
use rand::rngs::StdRng;

/// Name given to the `i`-th vertex of generated graphs
pub fn vertex_name(i: usize) -> String {
    format!("v{}", i)
}

/// Generates a random geometric graph of `n` points scattered around `center`
/// n: number of vertices
/// spread_deg: points fall within ±|spread_deg| of the center on both axes;
/// a non-finite spread places every point on the center
/// radius_km: vertices closer than this are connected, weighted by Haversine distance
pub fn generate_geometric(
    n: usize,
    center: GeoPoint,
    spread_deg: f64,
    radius_km: f64,
    seed: u64,
) -> UndirectedGraph<GeoPoint> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);
    let spread = if spread_deg.is_finite() { spread_deg.abs() } else { 0.0 };

    // Generate random points around the center
    let mut points = Vec::with_capacity(n);
    for i in 0..n {
        let point = GeoPoint::new(
            (center.latitude + rng.gen_range(-spread..=spread)).clamp(-90.0, 90.0),
            (center.longitude + rng.gen_range(-spread..=spread)).clamp(-180.0, 180.0),
        );
        points.push(point);
        graph.add_vertex(&vertex_name(i), point);
    }

    // Connect points that are within radius_km of each other
    for i in 0..n {
        for j in (i + 1)..n {
            let dist = points[i].distance_km(&points[j]);
            if dist <= radius_km {
                graph.add_edge(&vertex_name(i), &vertex_name(j), dist);
            }
        }
    }

    graph
}

/// Generates a `rows` x `cols` street grid starting at `origin`, with
/// neighbouring intersections `spacing_deg` apart and 4-connectivity
pub fn generate_grid(
    rows: usize,
    cols: usize,
    origin: GeoPoint,
    spacing_deg: f64,
) -> UndirectedGraph<GeoPoint> {
    let mut graph = UndirectedGraph::with_capacity(rows * cols);
    let name = |r: usize, c: usize| vertex_name(r * cols + c);

    for r in 0..rows {
        for c in 0..cols {
            let point = GeoPoint::new(
                origin.latitude + r as f64 * spacing_deg,
                origin.longitude + c as f64 * spacing_deg,
            );
            graph.add_vertex(&name(r, c), point);
        }
    }

    for r in 0..rows {
        for c in 0..cols {
            if r + 1 < rows {
                graph.connect_by_distance(&name(r, c), &name(r + 1, c));
            }
            if c + 1 < cols {
                graph.connect_by_distance(&name(r, c), &name(r, c + 1));
            }
        }
    }

    graph
}

/// Generates a graph without locations: `n` vertices and up to `edges` random
/// edges with integer-valued weights in `1..=max_weight`
pub fn generate_random_weighted(
    n: usize,
    edges: usize,
    max_weight: u32,
    seed: u64,
) -> UndirectedGraph<()> {
    let mut graph = UndirectedGraph::with_capacity(n);
    let mut rng = StdRng::seed_from_u64(seed);

    for i in 0..n {
        graph.add_vertex(&vertex_name(i), ());
    }

    if n < 2 {
        return graph;
    }

    for _ in 0..edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        // Avoid self-loops
        if u != v {
            let weight = rng.gen_range(1..=max_weight.max(1)) as f64;
            graph.add_edge(&vertex_name(u), &vertex_name(v), weight);
        }
    }

    graph
}
