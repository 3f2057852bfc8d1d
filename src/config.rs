//! # Campus Configuration
//!
//! Landmarks, walking graph and the route shown at startup, loaded from
//! JSON:
//!
//! ```json
//! {
//!   "landmarks": [
//!     { "name": "Library", "position": {"x": 0, "y": 0, "z": 0},
//!       "size": {"x": 1.5, "y": 3, "z": 1}, "base_color": 255 }
//!   ],
//!   "graph": { "Library": { "Admin Office": 3 } },
//!   "route": { "from": "Library", "to": "Admin Office" }
//! }
//! ```
//!
//! `CampusConfig::default()` is the three-building sample campus.

use std::path::Path;

use hashbrown::HashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::graph::WeightedGraph;
use crate::model::{Color, Landmark, Vec3};
use crate::{Error, Result};

/// A route request, by landmark identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteQuery {
    pub from: String,
    pub to: String,
}

impl RouteQuery {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Self { from: from.into(), to: to.into() }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CampusConfig {
    pub landmarks: Vec<Landmark>,
    pub graph: WeightedGraph,
    /// Route computed and drawn by [`Campus::startup`](crate::Campus::startup).
    #[serde(default)]
    pub route: Option<RouteQuery>,
}

impl CampusConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject configurations the rest of the crate cannot join on.
    ///
    /// Landmark names must be unique. Graph lint findings are logged,
    /// not rejected: one-way edges are legal.
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::new();
        for landmark in &self.landmarks {
            if landmark.name.is_empty() {
                return Err(Error::InvalidConfig("landmark with empty name".into()));
            }
            if !seen.insert(landmark.name.as_str()) {
                return Err(Error::DuplicateLandmark(landmark.name.clone()));
            }
        }

        for issue in self.graph.issues() {
            warn!(%issue, "campus graph");
        }

        if let Some(query) = &self.route {
            for id in [&query.from, &query.to] {
                if !self.graph.contains(id) {
                    warn!(node = %id, "startup route endpoint is not a graph node");
                }
            }
        }

        for id in self.graph.all_ids() {
            if !seen.contains(id) {
                warn!(node = id, "graph node has no landmark; routes through it cannot be drawn");
            }
        }

        Ok(())
    }
}

impl Default for CampusConfig {
    fn default() -> Self {
        Self {
            landmarks: vec![
                Landmark::new("Science Block", Vec3::new(-2.0, 0.0, 0.0), Color::RED)
                    .with_size(1.0, 2.0, 1.0),
                Landmark::new("Library", Vec3::new(0.0, 0.0, 0.0), Color::BLUE)
                    .with_size(1.5, 3.0, 1.0),
                Landmark::new("Admin Office", Vec3::new(2.0, 0.0, 0.0), Color::GREEN)
                    .with_size(1.0, 1.5, 1.0),
            ],
            graph: WeightedGraph::from_adjacency([
                ("Science Block", vec![("Library", 5.0), ("Admin Office", 10.0)]),
                ("Library", vec![("Science Block", 5.0), ("Admin Office", 3.0)]),
                ("Admin Office", vec![("Science Block", 10.0), ("Library", 3.0)]),
            ]),
            route: Some(RouteQuery::new("Science Block", "Admin Office")),
        }
    }
}
