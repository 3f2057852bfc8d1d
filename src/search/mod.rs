//! # Shortest-Path Engine
//!
//! Dijkstra single-source relaxation over a [`WeightedGraph`], stopped as
//! soon as the target is settled.
//!
//! ```text
//! shortest_path(graph, "Science Block", "Admin Office")
//!   → ["Science Block", "Library", "Admin Office"]   (5 + 3 = 8, not the direct 10)
//! ```
//!
//! ## Contract
//!
//! - Total: never panics, never errors. Unknown endpoints, unreachable
//!   targets and malformed input all return the empty route.
//! - Pure: distance and predecessor tables are per-call locals, so one
//!   graph can serve any number of concurrent queries without locking.
//! - Deterministic: distance ties are broken by node insertion order.
//! - Edge weights are assumed non-negative. Negative weights are not
//!   detected and give unspecified (but still terminating) results.
//!
//! ## Finders
//!
//! | Finder | Selection | Cost |
//! |--------|-----------|------|
//! | [`LinearScan`] | scan of the unsettled frontier | O(V²) |
//! | [`BinaryHeapScan`] | binary heap with lazy deletion | O((V+E) log V) |
//!
//! Both settle nodes in the same order and return identical routes.
//! `LinearScan` is the default.

mod heap;
mod linear;

pub use heap::BinaryHeapScan;
pub use linear::LinearScan;

use tracing::{debug, trace};

use crate::graph::WeightedGraph;
use crate::model::Route;

// ============================================================================
// Entry points
// ============================================================================

/// Minimum-weight path from `start` to `end`, as identifiers.
///
/// Empty when either endpoint is unknown or `end` is unreachable.
/// `start == end` yields `[start]`.
pub fn shortest_path(graph: &WeightedGraph, start: &str, end: &str) -> Vec<String> {
    shortest_route(graph, start, end).into_nodes()
}

/// Like [`shortest_path`], also reporting the total weight.
pub fn shortest_route(graph: &WeightedGraph, start: &str, end: &str) -> Route {
    LinearScan.find(graph, start, end, &mut ())
}

// ============================================================================
// Seams
// ============================================================================

/// A single-pair shortest-path strategy.
pub trait PathFinder {
    /// Search from `start` to `end`, reporting progress to `observer`.
    fn find(
        &self,
        graph: &WeightedGraph,
        start: &str,
        end: &str,
        observer: &mut dyn SearchObserver,
    ) -> Route {
        let (Some(start_slot), Some(end_slot)) = (graph.index_of(start), graph.index_of(end)) else {
            debug!(start, end, "route endpoint not in graph");
            return Route::empty();
        };

        debug!(start, end, nodes = graph.len(), "shortest path query");
        let state = self.search(graph, start_slot, end_slot, observer);
        let route = state.reconstruct(graph, start_slot, end_slot);

        if route.is_empty() {
            debug!(start, end, "no route");
        } else {
            debug!(start, end, hops = route.hops(), total_weight = route.total_weight, "route found");
        }
        route
    }

    /// Run the relaxation loop and return the final tables.
    ///
    /// Both slots are valid indices into `graph`.
    fn search(
        &self,
        graph: &WeightedGraph,
        start: usize,
        end: usize,
        observer: &mut dyn SearchObserver,
    ) -> SearchState;
}

/// Instrumentation hook for the relaxation loop. All methods default to no-ops.
pub trait SearchObserver {
    /// `id` left the frontier with its final `distance`.
    fn on_settle(&mut self, _id: &str, _distance: f64) {}

    /// `id`'s tentative distance dropped from `previous` to `updated` via `through`.
    fn on_relax(&mut self, _id: &str, _through: &str, _previous: f64, _updated: f64) {}
}

impl SearchObserver for () {}

// ============================================================================
// Distance / predecessor bookkeeping
// ============================================================================

/// Per-query distance and predecessor tables, indexed by node slot.
#[derive(Debug, Clone)]
pub struct SearchState {
    distance: Vec<f64>,
    predecessor: Vec<Option<usize>>,
}

impl SearchState {
    pub fn new(node_count: usize, start: usize) -> Self {
        let mut distance = vec![f64::INFINITY; node_count];
        distance[start] = 0.0;
        Self { distance, predecessor: vec![None; node_count] }
    }

    pub fn distance(&self, slot: usize) -> f64 {
        self.distance[slot]
    }

    /// Relax every outgoing edge of `current`, calling `improved` for each
    /// neighbor whose distance dropped. Dangling targets are skipped.
    pub fn relax(
        &mut self,
        graph: &WeightedGraph,
        current: usize,
        observer: &mut dyn SearchObserver,
        mut improved: impl FnMut(usize, f64),
    ) {
        let base = self.distance[current];
        for edge in graph.edges_at(current) {
            let Some(next) = graph.index_of(&edge.target) else {
                trace!(from = graph.id_at(current), to = %edge.target, "skipping dangling neighbor");
                continue;
            };
            let candidate = base + edge.weight;
            if candidate < self.distance[next] {
                observer.on_relax(graph.id_at(next), graph.id_at(current), self.distance[next], candidate);
                self.distance[next] = candidate;
                self.predecessor[next] = Some(current);
                improved(next, candidate);
            }
        }
    }

    /// Walk predecessors back from `end`. Empty unless the walk reaches `start`.
    pub fn reconstruct(&self, graph: &WeightedGraph, start: usize, end: usize) -> Route {
        let mut slots = Vec::new();
        let mut cursor = Some(end);
        while let Some(slot) = cursor {
            slots.push(slot);
            // Only reachable with negative cycles in the predecessor chain.
            if slots.len() > graph.len() {
                return Route::empty();
            }
            cursor = self.predecessor[slot];
        }
        slots.reverse();

        if slots.first() != Some(&start) {
            return Route::empty();
        }

        let nodes = slots.iter().map(|&slot| graph.id_at(slot).to_string()).collect();
        Route::new(nodes, self.distance[end])
    }
}

// ============================================================================
// Tests
// ============================================================================
