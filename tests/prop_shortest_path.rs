//! Property tests: optimality against brute force, path validity,
//! determinism, finder agreement and monotonic relaxation.

use campus_nav::{shortest_path, shortest_route, BinaryHeapScan, LinearScan, PathFinder, SearchObserver, WeightedGraph};
use hashbrown::HashMap;
use proptest::prelude::*;

const NAMES: [&str; 6] = ["a", "b", "c", "d", "e", "f"];

/// Random directed graphs over up to six nodes with small integer weights.
fn arb_graph() -> impl Strategy<Value = WeightedGraph> {
    (1usize..=NAMES.len()).prop_flat_map(|n| {
        prop::collection::vec((0..n, 0..n, 0u32..20), 0..(n * n)).prop_map(move |edges| {
            let adjacency = (0..n).map(|i| {
                let neighbors: Vec<(&str, f64)> = edges
                    .iter()
                    .filter(|(from, to, _)| *from == i && from != to)
                    .map(|&(_, to, w)| (NAMES[to], f64::from(w)))
                    .collect();
                (NAMES[i], neighbors)
            });
            WeightedGraph::from_adjacency(adjacency)
        })
    })
}

/// Cheapest simple-path cost by exhaustive DFS, `None` if unreachable.
fn brute_force(g: &WeightedGraph, from: &str, to: &str) -> Option<f64> {
    fn walk(g: &WeightedGraph, at: &str, to: &str, seen: &mut Vec<String>, cost: f64, best: &mut Option<f64>) {
        if at == to {
            *best = Some(best.map_or(cost, |b| b.min(cost)));
            return;
        }
        for edge in g.neighbors(at).unwrap_or(&[]) {
            if !g.contains(&edge.target) || seen.contains(&edge.target) {
                continue;
            }
            seen.push(edge.target.clone());
            walk(g, &edge.target, to, seen, cost + edge.weight, best);
            seen.pop();
        }
    }

    let mut best = None;
    walk(g, from, to, &mut vec![from.to_string()], 0.0, &mut best);
    best
}

/// Records settled distances and flags any relaxation that disagrees with them.
#[derive(Default)]
struct DistanceLog {
    settled: HashMap<String, f64>,
    settle_order: Vec<f64>,
    tentative: HashMap<String, f64>,
    violations: Vec<String>,
}

impl SearchObserver for DistanceLog {
    fn on_settle(&mut self, id: &str, distance: f64) {
        if let Some(&tentative) = self.tentative.get(id) {
            if tentative != distance {
                self.violations.push(format!("{id} settled at {distance}, last relaxed to {tentative}"));
            }
        }
        self.settled.insert(id.to_string(), distance);
        self.settle_order.push(distance);
    }

    fn on_relax(&mut self, id: &str, _through: &str, previous: f64, updated: f64) {
        if let Some(&fixed) = self.settled.get(id) {
            self.violations.push(format!("{id} relaxed to {updated} after settling at {fixed}"));
        }
        let expected = self.tentative.get(id).copied().unwrap_or(f64::INFINITY);
        if previous != expected {
            self.violations.push(format!("{id} reported previous {previous}, tracked {expected}"));
        }
        if updated >= previous {
            self.violations.push(format!("{id} went from {previous} to {updated}"));
        }
        self.tentative.insert(id.to_string(), updated);
    }
}

impl DistanceLog {
    fn settle_order_is_sorted(&self) -> bool {
        self.settle_order.windows(2).all(|w| w[0] <= w[1])
    }
}

#[test]
fn test_distance_log_catches_late_relaxation() {
    let mut log = DistanceLog::default();
    log.on_relax("b", "a", f64::INFINITY, 4.0);
    log.on_settle("b", 4.0);
    assert!(log.violations.is_empty());

    log.on_relax("b", "c", 4.0, 1.0);
    assert_eq!(log.violations.len(), 1);

    log.on_settle("c", 2.0);
    assert!(!log.settle_order_is_sorted());
}

proptest! {
    #[test]
    fn route_is_optimal_and_valid(g in arb_graph(), s in 0usize..6, t in 0usize..6) {
        let (from, to) = (NAMES[s], NAMES[t]);
        let route = shortest_route(&g, from, to);

        if !g.contains(from) || !g.contains(to) {
            prop_assert!(route.is_empty());
            return Ok(());
        }

        match brute_force(&g, from, to) {
            None => prop_assert!(route.is_empty()),
            Some(best) => {
                prop_assert_eq!(route.start(), Some(from));
                prop_assert_eq!(route.end(), Some(to));
                let mut walked = 0.0;
                for (a, b) in route.segments() {
                    let w = g.edge_weight(a, b);
                    prop_assert!(w.is_some(), "{} -> {} is not an edge", a, b);
                    walked += w.unwrap_or_default();
                }
                prop_assert_eq!(walked, best);
                prop_assert_eq!(route.total_weight, best);
            }
        }
    }

    #[test]
    fn queries_are_deterministic(g in arb_graph(), s in 0usize..6, t in 0usize..6) {
        let first = shortest_path(&g, NAMES[s], NAMES[t]);
        prop_assert_eq!(shortest_path(&g, NAMES[s], NAMES[t]), first);
    }

    #[test]
    fn heap_and_linear_scan_agree(g in arb_graph(), s in 0usize..6, t in 0usize..6) {
        let linear = LinearScan.find(&g, NAMES[s], NAMES[t], &mut ());
        let heap = BinaryHeapScan.find(&g, NAMES[s], NAMES[t], &mut ());
        prop_assert_eq!(heap, linear);
    }

    #[test]
    fn settled_distances_are_final_and_ordered(g in arb_graph(), s in 0usize..6, t in 0usize..6) {
        let mut log = DistanceLog::default();
        LinearScan.find(&g, NAMES[s], NAMES[t], &mut log);
        prop_assert!(log.violations.is_empty(), "{:?}", log.violations);
        prop_assert!(log.settle_order_is_sorted(), "{:?}", log.settle_order);

        let mut log = DistanceLog::default();
        BinaryHeapScan.find(&g, NAMES[s], NAMES[t], &mut log);
        prop_assert!(log.violations.is_empty(), "{:?}", log.violations);
        prop_assert!(log.settle_order_is_sorted(), "{:?}", log.settle_order);
    }
}
