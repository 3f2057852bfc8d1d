//! # Graph Store
//!
//! Immutable weighted adjacency keyed by landmark identifier.
//!
//! The store is directed-capable: an edge `a -> b` says nothing about
//! `b -> a`. Campus graphs are normally built symmetric (see
//! [`WeightedGraph::undirected`]) but asymmetric input is legal and is
//! searched exactly as given. [`WeightedGraph::issues`] reports anything
//! that looks accidental without rejecting it.
//!
//! ## Ordering
//!
//! Nodes keep first-insertion order and each neighbor list keeps its
//! insertion order. The search engine breaks distance ties by node order,
//! so a graph built from the same input always yields the same route.

mod codec;
pub mod issues;

use hashbrown::HashMap;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

pub use issues::GraphIssue;

/// Outgoing edges of one node, in insertion order.
pub type EdgeList = SmallVec<[Edge; 4]>;

/// A directed, weighted edge to `target`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Edge {
    pub target: String,
    /// Non-negative distance. Negative weights are accepted but make
    /// search results meaningless.
    pub weight: f64,
}

/// Weighted adjacency: identifier -> (neighbor identifier -> weight).
#[derive(Debug, Clone, Default)]
pub struct WeightedGraph {
    /// Node identifiers in first-insertion order. Position is the dense index.
    ids: Vec<String>,
    index: HashMap<String, usize>,
    /// `adjacency[i]` holds the outgoing edges of `ids[i]`.
    adjacency: Vec<EdgeList>,
}

impl WeightedGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from a complete adjacency mapping.
    ///
    /// A repeated top-level identifier replaces the earlier neighbor mapping
    /// but keeps its original position. A repeated neighbor inside one
    /// mapping keeps the last weight. Neighbors that never appear as a
    /// top-level key are kept as dangling references.
    pub fn from_adjacency<I, K, N, M>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (K, N)>,
        K: Into<String>,
        N: IntoIterator<Item = (M, f64)>,
        M: Into<String>,
    {
        let mut graph = Self::new();
        for (id, neighbors) in adjacency {
            let slot = graph.entry(id.into());
            let mut edges = EdgeList::new();
            for (target, weight) in neighbors {
                upsert_edge(&mut edges, target.into(), weight);
            }
            graph.adjacency[slot] = edges;
        }
        graph
    }

    /// Build a symmetric graph from an undirected edge list.
    ///
    /// Every `(a, b, w)` becomes `a -> b` and `b -> a`, both with weight `w`.
    pub fn undirected<I, A, B>(edges: I) -> Self
    where
        I: IntoIterator<Item = (A, B, f64)>,
        A: Into<String>,
        B: Into<String>,
    {
        let mut graph = Self::new();
        for (a, b, weight) in edges {
            let (a, b) = (a.into(), b.into());
            let ia = graph.entry(a.clone());
            let ib = graph.entry(b.clone());
            upsert_edge(&mut graph.adjacency[ia], b, weight);
            upsert_edge(&mut graph.adjacency[ib], a, weight);
        }
        graph
    }

    /// Slot for `id`, creating an empty node if it is new.
    fn entry(&mut self, id: String) -> usize {
        if let Some(&slot) = self.index.get(&id) {
            return slot;
        }
        let slot = self.ids.len();
        self.index.insert(id.clone(), slot);
        self.ids.push(id);
        self.adjacency.push(EdgeList::new());
        slot
    }

    /// Outgoing edges of `id`, or `None` when `id` is not a node.
    pub fn neighbors(&self, id: &str) -> Option<&[Edge]> {
        self.index_of(id).map(|slot| self.adjacency[slot].as_slice())
    }

    /// All node identifiers, in insertion order.
    pub fn all_ids(&self) -> impl ExactSizeIterator<Item = &str> {
        self.ids.iter().map(String::as_str)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Weight of the directed edge `from -> to`, if present.
    pub fn edge_weight(&self, from: &str, to: &str) -> Option<f64> {
        self.neighbors(from)?
            .iter()
            .find(|e| e.target == to)
            .map(|e| e.weight)
    }

    pub fn len(&self) -> usize {
        self.ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Total number of directed edges, dangling ones included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|edges| edges.len()).sum()
    }

    pub(crate) fn index_of(&self, id: &str) -> Option<usize> {
        self.index.get(id).copied()
    }

    pub(crate) fn id_at(&self, slot: usize) -> &str {
        &self.ids[slot]
    }

    pub(crate) fn edges_at(&self, slot: usize) -> &[Edge] {
        &self.adjacency[slot]
    }
}

impl PartialEq for WeightedGraph {
    /// Same nodes in the same order with the same edge lists.
    fn eq(&self, other: &Self) -> bool {
        self.ids == other.ids && self.adjacency == other.adjacency
    }
}

fn upsert_edge(edges: &mut EdgeList, target: String, weight: f64) {
    match edges.iter_mut().find(|e| e.target == target) {
        Some(existing) => existing.weight = weight,
        None => edges.push(Edge { target, weight }),
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn campus() -> WeightedGraph {
        WeightedGraph::from_adjacency([
            ("Science Block", vec![("Library", 5.0), ("Admin Office", 10.0)]),
            ("Library", vec![("Science Block", 5.0), ("Admin Office", 3.0)]),
            ("Admin Office", vec![("Science Block", 10.0), ("Library", 3.0)]),
        ])
    }

    #[test]
    fn test_neighbors_and_ids() {
        let g = campus();
        assert_eq!(g.len(), 3);
        let ids: Vec<_> = g.all_ids().collect();
        assert_eq!(ids, vec!["Science Block", "Library", "Admin Office"]);

        let n = g.neighbors("Library").unwrap();
        assert_eq!(n.len(), 2);
        assert_eq!(n[0].target, "Science Block");
        assert_eq!(n[1].weight, 3.0);
    }

    #[test]
    fn test_unknown_id_has_no_neighbors() {
        let g = campus();
        assert!(g.neighbors("Gym").is_none());
        assert!(!g.contains("Gym"));
        assert_eq!(g.edge_weight("Gym", "Library"), None);
    }

    #[test]
    fn test_edge_weight() {
        let g = campus();
        assert_eq!(g.edge_weight("Science Block", "Admin Office"), Some(10.0));
        assert_eq!(g.edge_weight("Library", "Library"), None);
        assert_eq!(g.edge_count(), 6);
    }

    #[test]
    fn test_repeated_key_replaces_mapping_in_place() {
        let g = WeightedGraph::from_adjacency([
            ("a", vec![("b", 1.0)]),
            ("b", vec![]),
            ("a", vec![("b", 2.0), ("b", 4.0)]),
        ]);
        let ids: Vec<_> = g.all_ids().collect();
        assert_eq!(ids, vec!["a", "b"]);
        assert_eq!(g.neighbors("a").unwrap().len(), 1);
        assert_eq!(g.edge_weight("a", "b"), Some(4.0));
    }

    #[test]
    fn test_undirected_mirrors_edges() {
        let g = WeightedGraph::undirected([("x", "y", 2.5), ("y", "z", 1.0)]);
        assert_eq!(g.edge_weight("x", "y"), Some(2.5));
        assert_eq!(g.edge_weight("y", "x"), Some(2.5));
        assert_eq!(g.edge_weight("z", "y"), Some(1.0));
        assert_eq!(g.edge_weight("x", "z"), None);
        let ids: Vec<_> = g.all_ids().collect();
        assert_eq!(ids, vec!["x", "y", "z"]);
    }

    #[test]
    fn test_dangling_neighbor_is_not_a_node() {
        let g = WeightedGraph::from_adjacency([("a", vec![("ghost", 1.0)])]);
        assert_eq!(g.len(), 1);
        assert!(!g.contains("ghost"));
        assert_eq!(g.edge_weight("a", "ghost"), Some(1.0));
    }
}
