//! Frontier-scan Dijkstra.

use tracing::trace;

use crate::graph::WeightedGraph;
use super::{PathFinder, SearchObserver, SearchState};

/// Dijkstra with a linear scan of the unsettled frontier.
///
/// Each step selects the frontier node with the smallest tentative
/// distance; among equals, the one inserted into the graph first. The loop
/// stops when it selects `end` (its distance is already final) or when the
/// smallest remaining distance is infinite (everything left is unreachable).
#[derive(Debug, Clone, Copy, Default)]
pub struct LinearScan;

impl PathFinder for LinearScan {
    fn search(
        &self,
        graph: &WeightedGraph,
        start: usize,
        end: usize,
        observer: &mut dyn SearchObserver,
    ) -> SearchState {
        let mut state = SearchState::new(graph.len(), start);
        let mut frontier: Vec<usize> = (0..graph.len()).collect();

        while !frontier.is_empty() {
            let mut best = 0;
            for (pos, &slot) in frontier.iter().enumerate().skip(1) {
                if state.distance(slot) < state.distance(frontier[best]) {
                    best = pos;
                }
            }

            let current = frontier[best];
            let distance = state.distance(current);
            if current == end || distance == f64::INFINITY {
                break;
            }

            // `remove` keeps the remaining frontier in insertion order.
            frontier.remove(best);
            trace!(node = graph.id_at(current), distance, "settled");
            observer.on_settle(graph.id_at(current), distance);

            state.relax(graph, current, observer, |_, _| {});
        }

        state
    }
}
