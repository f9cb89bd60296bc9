//! Track Racer - race a waypoint-following computer car around a fixed track
//!
//! Core modules:
//! - `sim`: Deterministic simulation (kinematics, steering, collisions, level state)
//! - `renderer`: Draw-command seam and the per-frame scene description
//! - `platform`: Input, clock and pixel-mask collaborators
//! - `settings`: JSON-backed runtime configuration
//! - `game_loop`: Frame pacing around the simulation

pub mod game_loop;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;

pub use settings::{CarTuning, Settings};
pub use game_loop::run_loop;
pub use sim::Race;

/// Game configuration constants
pub mod consts {
    use glam::IVec2;

    /// Frame rate cap
    pub const FPS: u32 = 60;
    /// Number of levels; clearing the last one wins the game
    pub const LEVELS: u32 = 10;
    /// How long the loss/victory message stays up (seconds)
    pub const OUTCOME_PAUSE_SECS: f64 = 5.0;

    /// Track image size after scaling (0.9 of the source artwork)
    pub const TRACK_WIDTH: u32 = 810;
    pub const TRACK_HEIGHT: u32 = 810;

    /// Top-left corner of the finish line image on screen
    pub const FINISH_POSITION: IVec2 = IVec2::new(130, 250);
    /// Finish line image size
    pub const FINISH_SIZE: (u32, u32) = (94, 16);

    /// Car sprite size after scaling (0.55 of the source artwork)
    pub const CAR_SIZE: (u32, u32) = (19, 38);

    pub const PLAYER_START: (f64, f64) = (180.0, 200.0);
    pub const COMPUTER_START: (f64, f64) = (150.0, 200.0);

    /// Player car defaults
    pub const PLAYER_MAX_VEL: f64 = 4.0;
    pub const PLAYER_ROTATION_VEL: f64 = 4.0;
    /// Computer car defaults
    pub const COMPUTER_MAX_VEL: f64 = 2.0;
    pub const COMPUTER_ROTATION_VEL: f64 = 4.0;
    /// Shared by both cars
    pub const ACCELERATION: f64 = 0.1;
    /// Computer velocity gained per level beyond the first
    pub const LEVEL_SPEEDUP: f64 = 0.2;

    /// Restitution applied when the player bounces off something
    pub const BOUNCE_FACTOR: f64 = 0.75;

    /// Waypoints the computer car follows, in order
    pub const PATH: [IVec2; 22] = [
        IVec2::new(175, 119),
        IVec2::new(110, 70),
        IVec2::new(56, 133),
        IVec2::new(70, 481),
        IVec2::new(318, 731),
        IVec2::new(404, 680),
        IVec2::new(418, 521),
        IVec2::new(507, 475),
        IVec2::new(600, 551),
        IVec2::new(613, 715),
        IVec2::new(736, 713),
        IVec2::new(734, 399),
        IVec2::new(611, 357),
        IVec2::new(409, 343),
        IVec2::new(433, 257),
        IVec2::new(697, 258),
        IVec2::new(738, 123),
        IVec2::new(581, 71),
        IVec2::new(303, 78),
        IVec2::new(275, 377),
        IVec2::new(176, 388),
        IVec2::new(178, 260),
    ];
}
