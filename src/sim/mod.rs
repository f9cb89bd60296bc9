//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay deterministic:
//! - One update per frame, no wall-clock reads (time is passed in)
//! - Fixed collision order
//! - No rendering or platform dependencies

pub mod car;
pub mod collision;
pub mod game_info;
pub mod race;
pub mod steering;

pub use car::{Car, PlayerCar, Rotation};
pub use collision::{Mask, TrackMasks, collide};
pub use game_info::GameInfo;
pub use race::{FrameEvent, FrameInput, HudSnapshot, Outcome, Phase, Race};
pub use steering::ComputerCar;
