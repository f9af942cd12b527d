//! Resolution of a single tank shot against the target and the obstacle

use std::io;

use serde_repr::{Deserialize_repr, Serialize_repr};
use tracing::debug;

use crate::{
    common::{
        constants::SHOT_COLOR,
        trajectory::{trajectory, Trajectory},
    },
    geometry::{BoundingBox, Vector2},
    render::{show_window, Surface},
};

/// Result code of a shot, serialized as `0` (miss) or `1` (hit)
#[derive(Serialize_repr, Deserialize_repr, Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ShotOutcome {
    Miss = 0,
    Hit = 1,
}

/// A resolved shot: its outcome and the part of the flight that gets drawn
#[derive(Debug, Clone, PartialEq)]
pub struct Shot {
    pub outcome: ShotOutcome,
    pub path: Trajectory,
}

/// Parameters of a single firing
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Launch {
    pub origin: Vector2,
    pub velocity: f64,
    /// Degrees, counter clockwise from the positive x axis
    pub angle: f64,
}

/// Computes the full flight and decides whether it struck `target`
///
/// A flight that enters the obstacle at any point is a miss and is cut at the
/// obstacle, even when it would reach the target earlier. Otherwise a flight
/// entering the target is a hit cut at the target, and anything else is a miss
/// drawn in full.
pub fn resolve_shot(
    target: &BoundingBox,
    obstacle: &BoundingBox,
    launch: &Launch,
    gravity: f64,
    samples: usize,
) -> Shot {
    let flight = trajectory(launch.origin, launch.velocity, launch.angle, gravity, samples);

    let obstacle_index = flight.first_in_box(obstacle);
    let target_index = flight.first_in_box(target);
    debug!(?obstacle_index, ?target_index, samples = flight.len(), "shot intersections");

    match (obstacle_index, target_index) {
        (Some(_), _) => Shot {
            outcome: ShotOutcome::Miss,
            path: flight.ended_at(obstacle),
        },
        (None, Some(_)) => Shot {
            outcome: ShotOutcome::Hit,
            path: flight.ended_at(target),
        },
        (None, None) => Shot {
            outcome: ShotOutcome::Miss,
            path: flight,
        },
    }
}

/// Executes one tank shot and draws its path on `surface`
pub fn tank_shot<S: Surface + ?Sized>(
    surface: &mut S,
    target: &BoundingBox,
    obstacle: &BoundingBox,
    launch: &Launch,
    gravity: f64,
    samples: usize,
) -> io::Result<Shot> {
    let shot = resolve_shot(target, obstacle, launch, gravity, samples);
    surface.polyline(&shot.path.xs, &shot.path.ys, SHOT_COLOR);
    show_window(surface)?;
    Ok(shot)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::constants::{GRAVITY, OBSTACLE_BOX, TANK2_BOX, TRAJECTORY_SAMPLES},
        render::DisplayList,
    };

    fn from_tank1(velocity: f64, angle: f64) -> Launch {
        Launch {
            origin: Vector2::new(12.5, 2.5),
            velocity,
            angle,
        }
    }

    fn resolve(launch: &Launch) -> Shot {
        resolve_shot(&TANK2_BOX, &OBSTACLE_BOX, launch, GRAVITY, TRAJECTORY_SAMPLES)
    }

    #[test]
    fn low_arc_is_stopped_by_the_obstacle() {
        let shot = resolve(&from_tank1(50.0, 45.0));
        assert_eq!(shot.outcome, ShotOutcome::Miss);

        // cut just before the obstacle's left face
        assert_eq!(shot.path.len(), 107);
        let end = shot.path.last().unwrap();
        assert!(end.x < OBSTACLE_BOX.left);
        assert!(end.x > OBSTACLE_BOX.left - 1.0);
    }

    #[test]
    fn high_arc_over_the_obstacle_hits() {
        let shot = resolve(&from_tank1(35.0, 70.0));
        assert_eq!(shot.outcome, ShotOutcome::Hit);
        assert_eq!(shot.path.len(), 977);
        assert!(shot.path.first_in_box(&TANK2_BOX).is_none());
        assert!(shot.path.first_in_box(&OBSTACLE_BOX).is_none());
    }

    #[test]
    fn fast_near_vertical_shot_drops_onto_the_target() {
        let shot = resolve(&from_tank1(80.0, 86.5));
        assert_eq!(shot.outcome, ShotOutcome::Hit);
        assert_eq!(shot.path.len(), 996);
        assert!(shot.path.first_in_box(&OBSTACLE_BOX).is_none());

        // a tenth of a degree either side falls past or short of the tank
        for angle in [86.3, 86.6] {
            assert_eq!(resolve(&from_tank1(80.0, angle)).outcome, ShotOutcome::Miss);
        }
    }

    #[test]
    fn short_lob_is_drawn_in_full() {
        let shot = resolve(&from_tank1(10.0, 80.0));
        assert_eq!(shot.outcome, ShotOutcome::Miss);
        assert_eq!(shot.path.len(), TRAJECTORY_SAMPLES);
    }

    #[test]
    fn obstacle_wins_even_when_the_target_comes_first() {
        let target = BoundingBox::new(20.0, 30.0, 0.0, 100.0);
        let obstacle = BoundingBox::new(50.0, 60.0, 0.0, 100.0);
        let launch = Launch {
            origin: Vector2::zero(),
            velocity: 30.0,
            angle: 45.0,
        };

        let flight = trajectory(launch.origin, 30.0, 45.0, GRAVITY, TRAJECTORY_SAMPLES);
        assert!(flight.first_in_box(&target) < flight.first_in_box(&obstacle));

        let shot = resolve_shot(&target, &obstacle, &launch, GRAVITY, TRAJECTORY_SAMPLES);
        assert_eq!(shot.outcome, ShotOutcome::Miss);
        assert_eq!(Some(shot.path.len()), flight.first_in_box(&obstacle));
    }

    #[test]
    fn tank_shot_draws_the_cut_path() {
        let mut surface = DisplayList::default();
        let shot = tank_shot(
            &mut surface,
            &TANK2_BOX,
            &OBSTACLE_BOX,
            &from_tank1(50.0, 45.0),
            GRAVITY,
            TRAJECTORY_SAMPLES,
        )
        .unwrap();

        let drawn: Vec<_> = surface.polylines().collect();
        assert_eq!(drawn.len(), 1);
        assert_eq!(drawn[0].0, shot.path.xs.as_slice());
        assert_eq!(drawn[0].1, shot.path.ys.as_slice());
        assert_eq!(surface.presented, 1);
    }

    #[test]
    fn outcome_codes() {
        assert_eq!(ShotOutcome::Miss as u8, 0);
        assert_eq!(serde_json::to_string(&ShotOutcome::Hit).unwrap(), "1");
    }
}
