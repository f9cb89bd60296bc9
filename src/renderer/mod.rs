//! Rendering seam
//!
//! The game only issues draw commands; windowing, image loading and font
//! rasterization belong to whoever implements [`Renderer`].

pub mod recording;
pub mod scene;

pub use recording::{DrawCommand, RecordingRenderer};
pub use scene::draw_frame;

use glam::{DVec2, IVec2};

/// RGB text color
pub type Color = [u8; 3];

/// HUD text color
pub const HUD_COLOR: Color = [255, 255, 255];
/// Centered message color
pub const MESSAGE_COLOR: Color = [200, 200, 200];

/// Static background images, drawn back to front in declaration order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layer {
    Ground,
    Track,
    Finish,
    TrackBorder,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sprite {
    PlayerCar,
    ComputerCar,
}

/// Draw target for one frame
pub trait Renderer {
    /// Blit a static layer with its top-left corner at `pos`
    fn blit_layer(&mut self, layer: Layer, pos: IVec2);

    /// Blit a sprite rotated by `angle` degrees (counterclockwise) about the
    /// center of its unrotated rectangle at `top_left`
    fn blit_rotated(&mut self, sprite: Sprite, top_left: DVec2, angle: f64);

    /// Left-aligned text whose bottom edge sits `bottom_margin` pixels above
    /// the bottom of the screen
    fn text(&mut self, text: &str, x: i32, bottom_margin: i32, color: Color);

    /// Text centered on the screen
    fn text_center(&mut self, text: &str, color: Color);

    /// Show the finished frame
    fn present(&mut self);
}
