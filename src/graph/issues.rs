//! Advisory lint for graph input.
//!
//! Nothing here is enforced: the search engine runs on whatever adjacency
//! it is given. Loaders call [`WeightedGraph::issues`] to log suspicious
//! input such as a mistyped neighbor name or a one-way edge.

use std::fmt;

use serde::Serialize;

use super::WeightedGraph;

/// Something about the adjacency that is legal but probably unintended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GraphIssue {
    /// `from` lists `to` as a neighbor, but `to` is not a node.
    DanglingNeighbor { from: String, to: String },
    /// `from -> to` exists without `to -> from` (a one-way path).
    MissingReverseEdge { from: String, to: String },
    /// Both directions exist with different weights. Reported once per pair.
    AsymmetricWeight { from: String, to: String, forward: f64, reverse: f64 },
    NegativeWeight { from: String, to: String, weight: f64 },
    NonFiniteWeight { from: String, to: String, weight: f64 },
}

impl fmt::Display for GraphIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DanglingNeighbor { from, to } => {
                write!(f, "'{from}' references unknown neighbor '{to}'")
            }
            Self::MissingReverseEdge { from, to } => {
                write!(f, "edge '{from}' -> '{to}' has no reverse edge")
            }
            Self::AsymmetricWeight { from, to, forward, reverse } => {
                write!(f, "'{from}' <-> '{to}' weights differ ({forward} vs {reverse})")
            }
            Self::NegativeWeight { from, to, weight } => {
                write!(f, "edge '{from}' -> '{to}' has negative weight {weight}")
            }
            Self::NonFiniteWeight { from, to, weight } => {
                write!(f, "edge '{from}' -> '{to}' has non-finite weight {weight}")
            }
        }
    }
}

impl WeightedGraph {
    /// Collect every [`GraphIssue`] in node order, then neighbor order.
    pub fn issues(&self) -> Vec<GraphIssue> {
        let mut found = Vec::new();

        for (slot, from) in self.ids.iter().enumerate() {
            for edge in &self.adjacency[slot] {
                let to = &edge.target;

                if !edge.weight.is_finite() {
                    found.push(GraphIssue::NonFiniteWeight {
                        from: from.clone(), to: to.clone(), weight: edge.weight,
                    });
                } else if edge.weight < 0.0 {
                    found.push(GraphIssue::NegativeWeight {
                        from: from.clone(), to: to.clone(), weight: edge.weight,
                    });
                }

                let Some(target_slot) = self.index_of(to) else {
                    found.push(GraphIssue::DanglingNeighbor { from: from.clone(), to: to.clone() });
                    continue;
                };

                match self.edge_weight(to, from) {
                    None => found.push(GraphIssue::MissingReverseEdge {
                        from: from.clone(), to: to.clone(),
                    }),
                    // Compare bit patterns so NaN pairs are not reported twice.
                    Some(reverse) if reverse.to_bits() != edge.weight.to_bits() && slot < target_slot => {
                        found.push(GraphIssue::AsymmetricWeight {
                            from: from.clone(),
                            to: to.clone(),
                            forward: edge.weight,
                            reverse,
                        });
                    }
                    Some(_) => {}
                }
            }
        }

        found
    }
}
