//! Closed form flight of the shell fired by a Tank

use crate::geometry::{end_trajectory_at_intersection, first_in_box, BoundingBox, Vector2};

/// Positions of one projectile flight, sampled in time order
///
/// `xs` and `ys` always have the same length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Trajectory {
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
}

impl Trajectory {
    pub fn len(&self) -> usize {
        self.xs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.xs.is_empty()
    }

    pub fn points(&self) -> impl Iterator<Item = Vector2> + '_ {
        self.xs
            .iter()
            .zip(&self.ys)
            .map(|(&x, &y)| Vector2::new(x, y))
    }

    pub fn last(&self) -> Option<Vector2> {
        self.points().last()
    }

    pub fn first_in_box(&self, bbox: &BoundingBox) -> Option<usize> {
        first_in_box(&self.xs, &self.ys, bbox)
    }

    /// Copy of the flight up to (but excluding) its first sample inside `bbox`
    pub fn ended_at(&self, bbox: &BoundingBox) -> Trajectory {
        let (xs, ys) = end_trajectory_at_intersection(&self.xs, &self.ys, bbox);
        Trajectory {
            xs: xs.to_vec(),
            ys: ys.to_vec(),
        }
    }
}

/// Time at which a shell launched at height `y0` with vertical speed `vy` is back at height 0
///
/// Positive root of `y0 + vy*t - g*t^2/2 = 0`.
pub fn flight_time(y0: f64, vy: f64, gravity: f64) -> f64 {
    let rise = vy / gravity;
    rise + (rise * rise + 2.0 * y0 / gravity).sqrt()
}

/// Samples the flight of a shell from `origin` with `speed` at `angle` degrees
///
/// The `samples` points are evenly spaced in time between launch and the
/// moment the shell returns to height 0, whatever the launch height.
/// Angles outside of `[0, 180]` simply rotate the launch velocity.
pub fn trajectory(
    origin: Vector2,
    speed: f64,
    angle: f64,
    gravity: f64,
    samples: usize,
) -> Trajectory {
    let radians = angle.to_radians();
    let velocity = Vector2::new(radians.cos(), radians.sin()).scale(speed);

    let t_final = flight_time(origin.y, velocity.y, gravity);
    let step = match samples {
        0 | 1 => 0.0,
        n => t_final / (n - 1) as f64,
    };

    let mut xs = Vec::with_capacity(samples);
    let mut ys = Vec::with_capacity(samples);
    for i in 0..samples {
        let t = step * i as f64;
        let position = origin.plus(&velocity.scale(t));
        xs.push(position.x);
        ys.push(position.y - 0.5 * gravity * t * t);
    }

    Trajectory { xs, ys }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::constants::{GRAVITY, TRAJECTORY_SAMPLES};

    fn shot(x0: f64, y0: f64, v: f64, theta: f64) -> Trajectory {
        trajectory(Vector2::new(x0, y0), v, theta, GRAVITY, TRAJECTORY_SAMPLES)
    }

    #[test]
    fn always_lands_at_height_zero() {
        for y0 in [0.0, 2.5, 10.0, 75.0] {
            for theta in [-60.0, -10.0, 0.0, 15.0, 45.0, 90.0, 135.0, 200.0] {
                let path = shot(3.0, y0, 20.0, theta);
                assert_eq!(path.len(), TRAJECTORY_SAMPLES);
                assert_eq!(path.xs.len(), path.ys.len());
                let landing = path.last().unwrap();
                assert!(landing.y.abs() < 1e-9, "y0={y0} theta={theta} -> {}", landing.y);
            }
        }
    }

    #[test]
    fn starts_at_origin() {
        let path = shot(12.5, 2.5, 50.0, 45.0);
        assert_eq!(path.xs[0], 12.5);
        assert_eq!(path.ys[0], 2.5);
    }

    #[test]
    fn ground_level_45_degrees_is_symmetric() {
        let path = shot(0.0, 0.0, 10.0, 45.0);
        let n = path.len();
        for i in 0..n / 2 {
            assert!((path.ys[i] - path.ys[n - 1 - i]).abs() < 1e-9);
        }

        // apex reached at t = v*sin(45)/g, i.e. halfway through the flight
        let t_peak = 10.0 * 45f64.to_radians().sin() / GRAVITY;
        assert!((t_peak - 0.7215).abs() < 1e-3);
        let apex = (0..n)
            .max_by(|&a, &b| path.ys[a].total_cmp(&path.ys[b]))
            .unwrap();
        assert!(apex == n / 2 - 1 || apex == n / 2);

        let vx = 10.0 * 45f64.to_radians().cos();
        assert!((path.xs[apex] - vx * t_peak).abs() < 0.01);
    }

    #[test]
    fn zero_speed_drops_straight_down() {
        let path = shot(7.0, 5.0, 0.0, 30.0);
        assert!(path.xs.iter().all(|&x| x == 7.0));
        assert_eq!(path.ys[0], 5.0);
        assert!(path.ys[path.len() - 1].abs() < 1e-9);
        assert!((flight_time(5.0, 0.0, GRAVITY) - (2.0 * 5.0 / GRAVITY).sqrt()).abs() < 1e-12);
    }

    #[test]
    fn downward_shot_lands_sooner() {
        let level = flight_time(10.0, 0.0, GRAVITY);
        let down = flight_time(10.0, -5.0, GRAVITY);
        assert!(down < level);
        assert!(shot(0.0, 10.0, 10.0, -30.0).last().unwrap().y.abs() < 1e-9);
    }

    #[test]
    fn requested_sample_count_is_honoured() {
        for samples in [0, 1, 2, 17] {
            let path = trajectory(Vector2::zero(), 10.0, 45.0, GRAVITY, samples);
            assert_eq!(path.len(), samples);
        }
    }

    #[test]
    fn ended_at_drops_the_intersecting_sample() {
        let path = shot(12.5, 2.5, 50.0, 45.0);
        let obstacle = BoundingBox::new(40.0, 60.0, 0.0, 50.0);
        let index = path.first_in_box(&obstacle).unwrap();
        let ended = path.ended_at(&obstacle);
        assert_eq!(ended.len(), index);
        assert_eq!(ended.xs[..], path.xs[..index]);
        assert!(ended.xs.iter().all(|&x| x < 40.0));
    }
}
