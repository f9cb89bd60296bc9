//! Platform collaborators
//!
//! The simulation talks to the outside world through these seams:
//! - Input: per-frame key state
//! - Time: frame-rate cap and a seconds clock
//! - Masks: pixel-mask construction and overlap

pub mod input;
pub mod mask;
pub mod time;

pub use input::{FrameInput, InputSource, ScriptedInput};
pub use mask::BitMask;
pub use time::{Clock, ManualClock, SystemClock};
