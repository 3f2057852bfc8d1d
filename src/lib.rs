//! # campus-nav — Campus Landmark Routing
//!
//! Labeled campus landmarks, a weighted walking graph between them, and
//! Dijkstra routing whose result is ready to draw as a line through the
//! scene.
//!
//! ## Design Principles
//!
//! 1. **Total search**: `shortest_path` never fails; "no route" is an empty path
//! 2. **Plain DTOs**: `Landmark`, `Route`, `Color`, `Vec3` cross all boundaries
//! 3. **Directed-capable store**: the graph is searched exactly as given
//! 4. **No globals**: one `Campus` owns its graph and scene
//!
//! ## Quick Start
//!
//! ```rust
//! use campus_nav::{Campus, shortest_path};
//!
//! let mut campus = Campus::sample();
//! let route = campus.show_route("Science Block", "Admin Office");
//! assert_eq!(route.nodes, ["Science Block", "Library", "Admin Office"]);
//! assert_eq!(route.total_weight, 8.0);
//! assert!(campus.scene().overlay().is_some());
//!
//! // The bare engine works on any graph.
//! assert!(shortest_path(campus.graph(), "Library", "Gym").is_empty());
//! ```
//!
//! ## Modules
//!
//! | Module | Role |
//! |--------|------|
//! | `graph` | Immutable weighted adjacency (Graph Store) |
//! | `search` | Shortest-path engine and finder strategies |
//! | `scene` | Selection, search highlight and route overlay state |
//! | `config` | JSON campus configuration |

// ============================================================================
// Modules
// ============================================================================

pub mod model;
pub mod graph;
pub mod search;
pub mod scene;
pub mod config;

// ============================================================================
// Re-exports
// ============================================================================

pub use model::{Color, Landmark, Route, Vec3};
pub use graph::{Edge, GraphIssue, WeightedGraph};
pub use search::{
    shortest_path, shortest_route,
    BinaryHeapScan, LinearScan, PathFinder, SearchObserver,
};
pub use scene::{InfoBox, LandmarkView, PathOverlay, Scene};
pub use config::{CampusConfig, RouteQuery};

use tracing::info;

// ============================================================================
// Top-level Campus handle
// ============================================================================

/// The primary entry point. A `Campus` owns the walking graph and the
/// scene state built from one [`CampusConfig`].
#[derive(Debug, Clone)]
pub struct Campus {
    graph: WeightedGraph,
    scene: Scene,
    startup_route: Option<RouteQuery>,
}

impl Campus {
    /// Validate `config` and build the scene from its landmarks.
    pub fn open(config: CampusConfig) -> Result<Self> {
        config.validate()?;
        let CampusConfig { landmarks, graph, route } = config;
        Ok(Self {
            graph,
            scene: Scene::new(landmarks),
            startup_route: route,
        })
    }

    /// The three-building sample campus.
    pub fn sample() -> Self {
        let config = CampusConfig::default();
        Self {
            scene: Scene::new(config.landmarks),
            graph: config.graph,
            startup_route: config.route,
        }
    }

    pub fn graph(&self) -> &WeightedGraph {
        &self.graph
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    pub fn scene_mut(&mut self) -> &mut Scene {
        &mut self.scene
    }

    /// Shortest route between two landmarks. Empty when there is none.
    pub fn route(&self, from: &str, to: &str) -> Route {
        shortest_route(&self.graph, from, to)
    }

    /// Like [`Campus::route`], but an unknown endpoint is an error rather
    /// than an empty route. An empty `Ok` then always means "unreachable".
    pub fn try_route(&self, from: &str, to: &str) -> Result<Route> {
        for id in [from, to] {
            if !self.graph.contains(id) {
                return Err(Error::NotFound(format!("Landmark '{id}'")));
            }
        }
        Ok(self.route(from, to))
    }

    /// Compute a route and replace the scene's overlay with it.
    ///
    /// An empty route clears the overlay.
    pub fn show_route(&mut self, from: &str, to: &str) -> Route {
        let route = self.route(from, to);
        self.scene.draw_route(route.nodes.as_slice());
        route
    }

    /// Show the configured startup route, if any.
    ///
    /// An endpoint missing from the graph is `Error::NotFound`, so a typo in
    /// the config is not mistaken for an unreachable route.
    pub fn startup(&mut self) -> Result<Option<Route>> {
        let Some(query) = self.startup_route.clone() else {
            return Ok(None);
        };
        let route = self.try_route(&query.from, &query.to)?;
        self.scene.draw_route(route.nodes.as_slice());
        info!(
            from = %query.from,
            to = %query.to,
            path = ?route.nodes,
            total_weight = route.total_weight,
            "startup route"
        );
        Ok(Some(route))
    }
}

// ============================================================================
// Error Types
// ============================================================================

/// Errors from loading a campus and from strict lookups. `shortest_path` never errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate landmark: {0}")]
    DuplicateLandmark(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
