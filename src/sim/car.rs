//! Car kinematics
//!
//! Both cars share the same pose/velocity model. Player-only responses
//! (coasting, bouncing) live on [`PlayerCar`]; the computer's steering lives in
//! [`super::steering`].

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use crate::consts::BOUNCE_FACTOR;
use crate::settings::CarTuning;

/// Turn request for a single frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rotation {
    /// Counterclockwise
    Left,
    /// Clockwise
    Right,
    Straight,
}

/// Pose and motion state shared by every car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Car {
    /// Top-left corner of the sprite (screen space, y grows downward)
    pub pos: DVec2,
    /// Heading in degrees, 0 = up, counterclockwise positive
    pub angle: f64,
    /// Signed speed along the heading
    pub vel: f64,
    pub max_vel: f64,
    /// Degrees turned per frame
    pub rotation_vel: f64,
    pub acceleration: f64,
    /// Where `reset` puts the car
    pub start_pos: DVec2,
    /// Sprite size in pixels (width, height)
    pub size: (u32, u32),
}

impl Car {
    pub fn new(tuning: CarTuning, start_pos: DVec2, size: (u32, u32)) -> Self {
        Self {
            pos: start_pos,
            angle: 0.0,
            vel: 0.0,
            max_vel: tuning.max_vel,
            rotation_vel: tuning.rotation_vel,
            acceleration: tuning.acceleration,
            start_pos,
            size,
        }
    }

    pub fn rotate(&mut self, rotation: Rotation) {
        match rotation {
            Rotation::Left => self.angle += self.rotation_vel,
            Rotation::Right => self.angle -= self.rotation_vel,
            Rotation::Straight => {}
        }
    }

    /// Accelerate toward `max_vel`, then move
    pub fn move_forward(&mut self) {
        self.vel = (self.vel + self.acceleration).min(self.max_vel);
        self.apply_motion();
    }

    /// Brake, then reverse up to half of `max_vel`, then move
    pub fn move_backward(&mut self) {
        self.vel = (self.vel - self.acceleration).max(-self.max_vel / 2.0);
        self.apply_motion();
    }

    /// Advance the position one frame along the heading.
    ///
    /// Angle 0 points up the screen, so both components are subtracted.
    pub fn apply_motion(&mut self) {
        let radians = self.angle.to_radians();
        let vertical = radians.cos() * self.vel;
        let horizontal = radians.sin() * self.vel;

        self.pos.y -= vertical;
        self.pos.x -= horizontal;
    }

    /// Back to the start pose, stationary
    pub fn reset(&mut self) {
        self.pos = self.start_pos;
        self.angle = 0.0;
        self.vel = 0.0;
    }

    /// Whether the sprite's (unrotated) bounding rectangle contains `point`.
    ///
    /// The rectangle origin is truncated to whole pixels; the far edges are
    /// exclusive.
    pub fn bounds_contain(&self, point: IVec2) -> bool {
        let x = self.pos.x as i32;
        let y = self.pos.y as i32;
        let (w, h) = (self.size.0 as i32, self.size.1 as i32);

        point.x >= x && point.x < x + w && point.y >= y && point.y < y + h
    }
}

/// The human-controlled car
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerCar {
    pub car: Car,
}

impl PlayerCar {
    pub fn new(tuning: CarTuning, start_pos: DVec2, size: (u32, u32)) -> Self {
        Self {
            car: Car::new(tuning, start_pos, size),
        }
    }

    /// Coast: bleed off forward speed at half the acceleration, never below
    /// zero. Reverse speed is left alone.
    pub fn reduce_speed(&mut self) {
        let car = &mut self.car;
        if car.vel > 0.0 {
            car.vel = (car.vel - car.acceleration / 2.0).max(0.0);
        }
        car.apply_motion();
    }

    /// Reverse and damp the velocity, then step back along the heading
    pub fn bounce(&mut self) {
        let car = &mut self.car;
        car.vel = -car.vel * BOUNCE_FACTOR;
        car.apply_motion();
    }

    pub fn reset(&mut self) {
        self.car.reset();
    }
}
