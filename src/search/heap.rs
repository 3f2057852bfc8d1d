//! Priority-queue Dijkstra for graphs too large for a frontier scan.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use tracing::trace;

use crate::graph::WeightedGraph;
use super::{PathFinder, SearchObserver, SearchState};

/// Dijkstra over a binary min-heap, O((V+E) log V).
///
/// Improved distances are pushed as new entries; stale entries are skipped
/// when popped. Ties pop the lowest insertion slot first, so nodes settle
/// in the same order as [`LinearScan`](super::LinearScan).
#[derive(Debug, Clone, Copy, Default)]
pub struct BinaryHeapScan;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Candidate {
    distance: f64,
    slot: usize,
}

impl Eq for Candidate {}

impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: BinaryHeap is a max-heap
        other
            .distance
            .partial_cmp(&self.distance)
            .unwrap_or(Ordering::Equal)
            .then_with(|| other.slot.cmp(&self.slot))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PathFinder for BinaryHeapScan {
    fn search(
        &self,
        graph: &WeightedGraph,
        start: usize,
        end: usize,
        observer: &mut dyn SearchObserver,
    ) -> SearchState {
        let mut state = SearchState::new(graph.len(), start);
        let mut settled = vec![false; graph.len()];
        let mut heap = BinaryHeap::new();
        heap.push(Candidate { distance: 0.0, slot: start });

        while let Some(Candidate { distance, slot }) = heap.pop() {
            if settled[slot] || distance > state.distance(slot) {
                continue;
            }
            if slot == end {
                break;
            }

            settled[slot] = true;
            trace!(node = graph.id_at(slot), distance, "settled");
            observer.on_settle(graph.id_at(slot), distance);

            state.relax(graph, slot, observer, |next, distance| {
                heap.push(Candidate { distance, slot: next });
            });
        }

        state
    }
}
