//! Pixel-mask collision queries
//!
//! The simulation never looks at pixels itself. Anything that can report the
//! first overlapping pixel between two masks plugs in through [`Mask`].

use glam::IVec2;

use super::car::Car;

/// A per-pixel collision mask
pub trait Mask {
    /// First pixel where `other`, placed at `offset` relative to `self`,
    /// overlaps `self`. The point is in `self`'s local coordinates.
    fn overlap(&self, other: &Self, offset: IVec2) -> Option<IVec2>;
}

/// Test a car against a static target mask placed at `target_offset`.
///
/// `car_mask` is built from the unrotated sprite; rotation only affects
/// drawing. Returns the first colliding pixel in the target's coordinates.
pub fn collide<M: Mask>(
    car: &Car,
    car_mask: &M,
    target: &M,
    target_offset: IVec2,
) -> Option<IVec2> {
    let offset = IVec2::new(
        (car.pos.x - target_offset.x as f64) as i32,
        (car.pos.y - target_offset.y as f64) as i32,
    );
    target.overlap(car_mask, offset)
}

/// The fixed masks a race is checked against
#[derive(Debug, Clone)]
pub struct TrackMasks<M> {
    /// Track border, positioned at the screen origin
    pub border: M,
    pub finish: M,
    /// Top-left corner of the finish line on screen
    pub finish_offset: IVec2,
    pub player: M,
    pub computer: M,
}

impl<M: Mask> TrackMasks<M> {
    pub fn player_hits_border(&self, car: &Car) -> Option<IVec2> {
        collide(car, &self.player, &self.border, IVec2::ZERO)
    }

    pub fn player_hits_finish(&self, car: &Car) -> Option<IVec2> {
        collide(car, &self.player, &self.finish, self.finish_offset)
    }

    pub fn computer_hits_finish(&self, car: &Car) -> Option<IVec2> {
        collide(car, &self.computer, &self.finish, self.finish_offset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::BitMask;
    use crate::settings::CarTuning;
    use glam::DVec2;

    fn car_at(x: f64, y: f64) -> Car {
        Car::new(CarTuning::player(), DVec2::new(x, y), (4, 4))
    }

    #[test]
    fn test_collide_reports_target_local_point() {
        let target = BitMask::filled(10, 10);
        let car_mask = BitMask::filled(4, 4);
        let car = car_at(105.0, 207.0);

        let hit = collide(&car, &car_mask, &target, IVec2::new(100, 200));
        assert_eq!(hit, Some(IVec2::new(5, 7)));
    }

    #[test]
    fn test_collide_truncates_offset() {
        let target = BitMask::filled(10, 10);
        let car_mask = BitMask::filled(4, 4);
        // -3.5 truncates toward zero to -3, so the car still reaches row 0
        let car = car_at(0.0, -3.5);

        let hit = collide(&car, &car_mask, &target, IVec2::ZERO);
        assert_eq!(hit, Some(IVec2::new(0, 0)));
    }

    #[test]
    fn test_collide_miss() {
        let target = BitMask::filled(10, 10);
        let car_mask = BitMask::filled(4, 4);
        let car = car_at(50.0, 50.0);

        assert_eq!(collide(&car, &car_mask, &target, IVec2::ZERO), None);
    }

    #[test]
    fn test_collide_is_a_pure_query() {
        let target = BitMask::filled(10, 10);
        let car_mask = BitMask::filled(4, 4);
        let car = car_at(2.0, 2.0);
        let before = car.pos;

        let _ = collide(&car, &car_mask, &target, IVec2::ZERO);
        assert_eq!(car.pos, before);
    }
}
