//! Plane geometry shared by the physics, the shot resolver and the renderer

use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn plus(&self, coord: &Vector2) -> Self {
        Self {
            x: self.x + coord.x,
            y: self.y + coord.y,
        }
    }

    pub fn scale(&self, factor: f64) -> Self {
        Self {
            x: self.x * factor,
            y: self.y * factor,
        }
    }
}

/// Axis aligned rectangle stored as `(left, right, bottom, top)`
///
/// Used for the tank footprints and the central obstacle.
/// Well formed boxes satisfy `left <= right` and `bottom <= top`.
#[derive(Serialize, Deserialize, Default, Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub top: f64,
}

impl BoundingBox {
    pub const fn new(left: f64, right: f64, bottom: f64, top: f64) -> Self {
        Self {
            left,
            right,
            bottom,
            top,
        }
    }

    /// Closed interval test on both axes
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.left && x <= self.right && y >= self.bottom && y <= self.top
    }

    /// Geometric center of the box, where a tank fires from
    pub fn center(&self) -> Vector2 {
        Vector2 {
            x: (self.left + self.right) / 2.0,
            y: (self.bottom + self.top) / 2.0,
        }
    }

    pub fn is_well_formed(&self) -> bool {
        self.left <= self.right && self.bottom <= self.top
    }
}

/// Index of the earliest sample `(xs[j], ys[j])` that lies inside `bbox`
///
/// Samples are visited in time order, so "first" is the earliest point of the
/// flight and not the one spatially closest to the box.
/// Only the common prefix of `xs` and `ys` is considered.
pub fn first_in_box(xs: &[f64], ys: &[f64], bbox: &BoundingBox) -> Option<usize> {
    xs.iter()
        .zip(ys)
        .position(|(&x, &y)| bbox.contains(x, y))
}

/// The portion of a path prior to its first intersection with `bbox`
///
/// The intersecting sample itself is excluded. A path that never enters the
/// box is returned whole.
pub fn end_trajectory_at_intersection<'a>(
    xs: &'a [f64],
    ys: &'a [f64],
    bbox: &BoundingBox,
) -> (&'a [f64], &'a [f64]) {
    match first_in_box(xs, ys, bbox) {
        Some(i) => (&xs[..i], &ys[..i]),
        None => (xs, ys),
    }
}
