use log::debug;
use num_traits::Float;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

use crate::algorithm::{PathResult, ShortestPathAlgorithm};
use crate::data_structures::{PriorityQueue, QueueEntry};
use crate::graph::Graph;

/// Classic Dijkstra's algorithm with early exit at the target
#[derive(Debug, Default)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

/// Bookkeeping owned by a single query
struct SearchState<W> {
    /// Tentative distance from the source for each vertex
    distances: Vec<W>,
    predecessors: Vec<Option<usize>>,
    /// Vertices whose distance is final
    visited: Vec<bool>,
}

impl<W> SearchState<W>
where
    W: Float + Debug + Copy,
{
    fn new(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![W::infinity(); vertex_count];
        distances[source] = W::zero();
        SearchState {
            distances,
            predecessors: vec![None; vertex_count],
            visited: vec![false; vertex_count],
        }
    }

    /// Walks predecessor links back from `target` and returns the path in
    /// source-to-target order.
    fn path_to(&self, source: usize, target: usize) -> Option<Vec<usize>> {
        let mut path = vec![target];
        let mut current = target;

        // Predecessors always point at vertices finalized earlier, so this terminates
        while current != source {
            current = self.predecessors[current]?;
            path.push(current);
        }

        path.reverse();
        Some(path)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Float + Debug + Copy,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn find_path(&self, graph: &G, source: usize, target: usize) -> Option<PathResult<W>> {
        let n = graph.vertex_count();
        if source >= n || target >= n {
            return None;
        }

        let mut state = SearchState::new(n, source);

        // Seed the queue with every vertex at its initial tentative distance
        let mut queue = PriorityQueue::with_capacity(n);
        for (vertex, distance) in state.distances.iter().enumerate() {
            queue.enqueue(vertex, OrderedFloat(*distance));
        }

        let mut relaxations = 0usize;
        while let Some(QueueEntry { payload: u, .. }) = queue.dequeue() {
            // Stale entry for a vertex that was already finalized
            if state.visited[u] {
                continue;
            }

            let dist_u = state.distances[u];
            if dist_u == W::infinity() {
                // Everything left in the queue is unreachable
                break;
            }

            if u == target {
                debug!(
                    "reached target {} from {} after {} relaxations",
                    target, source, relaxations
                );
                return state.path_to(source, target).map(|vertices| PathResult {
                    vertices,
                    distance: dist_u,
                });
            }

            state.visited[u] = true;

            // Relax all incident edges
            for (v, weight) in graph.neighbors(u) {
                if state.visited[v] {
                    continue;
                }

                let new_dist = dist_u + weight;
                if new_dist < state.distances[v] {
                    state.distances[v] = new_dist;
                    state.predecessors[v] = Some(u);
                    queue.enqueue(v, OrderedFloat(new_dist));
                    relaxations += 1;
                }
            }
        }

        debug!("target {} unreachable from {}", target, source);
        None
    }
}
