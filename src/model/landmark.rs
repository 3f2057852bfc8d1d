//! Landmark records and the small spatial/color value types they carry.

use std::fmt;

use serde::{Deserialize, Serialize};

/// 24-bit RGB color, `0xRRGGBB`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Color(pub u32);

impl Color {
    pub const RED: Color = Color(0xff0000);
    pub const GREEN: Color = Color(0x00ff00);
    pub const BLUE: Color = Color(0x0000ff);

    /// Landmark picked by the pointer.
    pub const SELECTED: Color = Color(0xffff00);
    /// Landmark matched by the text search.
    pub const SEARCH_MATCH: Color = Color(0x00ffff);
    /// Route overlay line.
    pub const PATH_LINE: Color = Color(0xffff00);
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06x}", self.0 & 0x00ff_ffff)
    }
}

/// A point or extent in scene space.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }
}

/// A named building on the campus.
///
/// `name` is the join key between the graph, the scene and route results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub name: String,
    pub position: Vec3,
    pub size: Vec3,
    /// Color the landmark returns to whenever highlights are cleared.
    pub base_color: Color,
}

impl Landmark {
    pub fn new(name: impl Into<String>, position: Vec3, base_color: Color) -> Self {
        Self {
            name: name.into(),
            position,
            size: Vec3::new(1.0, 1.0, 1.0),
            base_color,
        }
    }

    pub fn with_size(mut self, width: f32, height: f32, depth: f32) -> Self {
        self.size = Vec3::new(width, height, depth);
        self
    }

    /// Case-insensitive substring match used by the search box.
    pub fn matches(&self, query: &str) -> bool {
        self.name.to_lowercase().contains(&query.to_lowercase())
    }
}
