//! Route overlay: the polyline drawn through a route's landmarks.

use serde::Serialize;

use crate::model::{Color, Vec3};

/// Connected line segments through `points`, in route order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PathOverlay {
    /// At least two points.
    pub points: Vec<Vec3>,
    pub color: Color,
}

impl PathOverlay {
    /// Place each identifier with `locate`, dropping the ones it cannot place.
    ///
    /// `None` when fewer than two points remain.
    pub fn resolve<S, F>(path: &[S], locate: F) -> Option<Self>
    where
        S: AsRef<str>,
        F: Fn(&str) -> Option<Vec3>,
    {
        let points: Vec<Vec3> = path.iter().filter_map(|id| locate(id.as_ref())).collect();
        if points.len() < 2 {
            return None;
        }
        Some(Self { points, color: Color::PATH_LINE })
    }

    /// `(from, to)` pairs for each drawn segment.
    pub fn segments(&self) -> impl Iterator<Item = (Vec3, Vec3)> + '_ {
        self.points.windows(2).map(|w| (w[0], w[1]))
    }
}
