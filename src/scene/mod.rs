//! # Scene Controller
//!
//! Render-ready state for the campus view: per-landmark color and
//! rotation, the info box, and the route overlay. A renderer reads this
//! state each frame; nothing here draws.
//!
//! One `Scene` is constructed per view and owned by the caller (usually via
//! [`Campus`](crate::Campus)). Colors reset to each landmark's own
//! `base_color`, so adding a landmark never touches this module.

mod overlay;

pub use overlay::PathOverlay;

use hashbrown::HashMap;
use serde::Serialize;
use tracing::debug;

use crate::model::{Color, Landmark, Vec3};

/// Radians added to every landmark's y-rotation per [`Scene::tick`].
pub const ROTATION_STEP: f32 = 0.01;

/// A landmark plus its mutable display state.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LandmarkView {
    pub landmark: Landmark,
    pub color: Color,
    pub rotation_y: f32,
}

/// The text panel shown for the selected landmark.
#[derive(Debug, Clone, PartialEq, Default, Serialize)]
pub struct InfoBox {
    pub visible: bool,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Scene {
    views: Vec<LandmarkView>,
    by_name: HashMap<String, usize>,
    info: InfoBox,
    overlay: Option<PathOverlay>,
}

impl Scene {
    /// Build a scene from landmark records. A repeated name keeps the first
    /// record for name lookups; callers validate uniqueness beforehand.
    pub fn new(landmarks: impl IntoIterator<Item = Landmark>) -> Self {
        let mut scene = Self::default();
        for landmark in landmarks {
            let slot = scene.views.len();
            scene.by_name.entry(landmark.name.clone()).or_insert(slot);
            scene.views.push(LandmarkView {
                color: landmark.base_color,
                rotation_y: 0.0,
                landmark,
            });
        }
        scene
    }

    pub fn landmarks(&self) -> &[LandmarkView] {
        &self.views
    }

    /// Name -> landmark lookup used to place route points.
    pub fn landmark(&self, name: &str) -> Option<&LandmarkView> {
        self.by_name.get(name).map(|&slot| &self.views[slot])
    }

    pub fn position_of(&self, name: &str) -> Option<Vec3> {
        self.landmark(name).map(|view| view.landmark.position)
    }

    pub fn info_box(&self) -> &InfoBox {
        &self.info
    }

    pub fn overlay(&self) -> Option<&PathOverlay> {
        self.overlay.as_ref()
    }

    // ========================================================================
    // Interaction
    // ========================================================================

    pub fn reset_colors(&mut self) {
        for view in &mut self.views {
            view.color = view.landmark.base_color;
        }
    }

    /// Apply a pointer pick. `hit` is the name of the landmark under the
    /// pointer, or `None` for a click on empty space.
    ///
    /// Clears all highlights, then highlights the hit and shows its name in
    /// the info box. A miss (including an unknown name) hides the info box.
    pub fn select(&mut self, hit: Option<&str>) -> Option<&LandmarkView> {
        self.reset_colors();

        let Some(slot) = hit.and_then(|name| self.by_name.get(name).copied()) else {
            self.info = InfoBox::default();
            return None;
        };

        let view = &mut self.views[slot];
        view.color = Color::SELECTED;
        self.info = InfoBox {
            visible: true,
            text: format!("Building: {}", view.landmark.name),
        };
        debug!(landmark = %view.landmark.name, "selected");
        Some(&self.views[slot])
    }

    /// Text search. Landmarks whose name contains `query` (ignoring case)
    /// turn cyan, the rest return to their base color. Returns the number
    /// of matches; an empty query matches everything.
    pub fn filter(&mut self, query: &str) -> usize {
        let mut matched = 0;
        for view in &mut self.views {
            if view.landmark.matches(query) {
                view.color = Color::SEARCH_MATCH;
                matched += 1;
            } else {
                view.color = view.landmark.base_color;
            }
        }
        debug!(query, matched, "filtered landmarks");
        matched
    }

    /// Replace the route overlay with one through `path`.
    ///
    /// Identifiers without a landmark are skipped. Fewer than two placed
    /// points leaves no overlay.
    pub fn draw_route<S: AsRef<str>>(&mut self, path: &[S]) -> Option<&PathOverlay> {
        self.overlay = PathOverlay::resolve(path, |name| self.position_of(name));
        self.overlay.as_ref()
    }

    pub fn clear_route(&mut self) {
        self.overlay = None;
    }

    /// Advance the idle spin by one frame.
    pub fn tick(&mut self) {
        for view in &mut self.views {
            view.rotation_y += ROTATION_STEP;
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
