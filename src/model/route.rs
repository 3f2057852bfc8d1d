//! Route — the ordered result of a shortest-path query.

use serde::{Deserialize, Serialize};

/// An ordered walk from start to end (inclusive) and its total weight.
///
/// An empty route is the universal "no route" signal: unknown endpoints and
/// unreachable targets both produce it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Route {
    /// Landmark identifiers, start first.
    pub nodes: Vec<String>,
    /// Sum of edge weights along `nodes`. Zero for empty and single-node routes.
    pub total_weight: f64,
}

impl Route {
    pub fn empty() -> Self {
        Self { nodes: Vec::new(), total_weight: 0.0 }
    }

    pub fn new(nodes: Vec<String>, total_weight: f64) -> Self {
        Self { nodes, total_weight }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges walked.
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }

    pub fn start(&self) -> Option<&str> {
        self.nodes.first().map(String::as_str)
    }

    pub fn end(&self) -> Option<&str> {
        self.nodes.last().map(String::as_str)
    }

    /// Consecutive `(from, to)` pairs along the route.
    pub fn segments(&self) -> impl Iterator<Item = (&str, &str)> {
        self.nodes.windows(2).map(|w| (w[0].as_str(), w[1].as_str()))
    }

    pub fn into_nodes(self) -> Vec<String> {
        self.nodes
    }
}

impl Default for Route {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_route() {
        let r = Route::empty();
        assert!(r.is_empty());
        assert_eq!(r.hops(), 0);
        assert_eq!(r.start(), None);
        assert_eq!(r.segments().count(), 0);
    }

    #[test]
    fn test_segments() {
        let r = Route::new(vec!["a".into(), "b".into(), "c".into()], 4.0);
        assert_eq!(r.hops(), 2);
        assert_eq!(r.start(), Some("a"));
        assert_eq!(r.end(), Some("c"));
        let segs: Vec<_> = r.segments().collect();
        assert_eq!(segs, vec![("a", "b"), ("b", "c")]);
    }
}
