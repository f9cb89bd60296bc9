//! Waypoint steering for the computer car
//!
//! Each frame the car turns at most `rotation_vel` degrees toward the current
//! waypoint, advances the waypoint cursor once its bounding rectangle reaches
//! the point, and then moves at constant speed. After the last waypoint the
//! car stops until it is re-armed for the next level.

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::car::Car;
use crate::settings::CarTuning;

/// The autonomous car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ComputerCar {
    pub car: Car,
    /// Waypoints in visiting order
    pub path: Vec<IVec2>,
    /// Index of the waypoint being chased
    pub current_point: usize,
    /// Speed added per level past the first
    pub level_speedup: f64,
}

impl ComputerCar {
    pub fn new(
        tuning: CarTuning,
        start_pos: DVec2,
        size: (u32, u32),
        path: Vec<IVec2>,
        level_speedup: f64,
    ) -> Self {
        let mut car = Car::new(tuning, start_pos, size);
        car.vel = tuning.max_vel;
        Self {
            car,
            path,
            current_point: 0,
            level_speedup,
        }
    }

    /// True once every waypoint has been reached
    pub fn finished_path(&self) -> bool {
        self.current_point >= self.path.len()
    }

    /// Turn toward the current waypoint by at most `rotation_vel` degrees.
    ///
    /// The heading difference is folded only once (`>= 180` loses 360);
    /// differences at or below -180 are used as-is.
    pub fn calculate_angle(&mut self) {
        let Some(&target) = self.path.get(self.current_point) else {
            return;
        };
        let car = &mut self.car;

        let x_diff = target.x as f64 - car.pos.x;
        let y_diff = target.y as f64 - car.pos.y;

        let mut desired_radians = if y_diff == 0.0 {
            std::f64::consts::FRAC_PI_2
        } else {
            (x_diff / y_diff).atan()
        };

        // atan only covers the upper half-plane; point downward when the target is below
        if target.y as f64 > car.pos.y {
            desired_radians += std::f64::consts::PI;
        }

        let mut difference = car.angle - desired_radians.to_degrees();
        if difference >= 180.0 {
            difference -= 360.0;
        }

        let step = car.rotation_vel.min(difference.abs());
        if difference > 0.0 {
            car.angle -= step;
        } else {
            car.angle += step;
        }
    }

    /// Advance to the next waypoint if the car's rectangle contains the current one
    pub fn update_path_point(&mut self) {
        let Some(&target) = self.path.get(self.current_point) else {
            return;
        };

        if self.car.bounds_contain(target) {
            self.current_point += 1;
            if self.finished_path() {
                log::debug!("Computer car reached the last waypoint");
            } else {
                log::debug!(
                    "Computer car heading to waypoint {} at {}",
                    self.current_point,
                    self.path[self.current_point]
                );
            }
        }
    }

    /// One frame of autonomous driving. A car past its last waypoint stays put.
    pub fn advance(&mut self) {
        if self.finished_path() {
            return;
        }

        self.calculate_angle();
        self.update_path_point();
        self.car.apply_motion();
    }

    /// Re-arm for `level`: start pose, faster by `level_speedup` per level,
    /// chasing the first waypoint again
    pub fn next_level(&mut self, level: u32) {
        self.car.reset();
        self.car.vel = self.car.max_vel + level.saturating_sub(1) as f64 * self.level_speedup;
        self.current_point = 0;
    }

    /// Start pose and zero speed; the waypoint cursor is left where it was
    pub fn reset(&mut self) {
        self.car.reset();
    }
}
