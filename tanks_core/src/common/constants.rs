//! Up front configuration values

use crate::{geometry::BoundingBox, render::Color};

/// Acceleration due to gravity
pub const GRAVITY: f64 = 9.8;
/// Number of time samples taken along every shot
pub const TRAJECTORY_SAMPLES: usize = 1000;

/// Visible extent of the field, identical on both axes
pub const FIELD_LIMITS: (f64, f64) = (0.0, 100.0);

/// Footprint of Player 1's tank
pub const TANK1_BOX: BoundingBox = BoundingBox::new(10.0, 15.0, 0.0, 5.0);
/// Footprint of Player 2's tank
pub const TANK2_BOX: BoundingBox = BoundingBox::new(90.0, 95.0, 0.0, 5.0);
/// The wall between the two tanks
pub const OBSTACLE_BOX: BoundingBox = BoundingBox::new(40.0, 60.0, 0.0, 50.0);

pub const TANK1_COLOR: Color = Color::Blue;
pub const TANK2_COLOR: Color = Color::Red;
pub const OBSTACLE_COLOR: Color = Color::Black;
pub const SHOT_COLOR: Color = Color::Yellow;
