//! A renderer that just remembers what it was asked to draw

use glam::{DVec2, IVec2};

use super::{Color, Layer, Renderer, Sprite};

#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    Layer(Layer, IVec2),
    Rotated {
        sprite: Sprite,
        top_left: DVec2,
        angle: f64,
    },
    Text {
        text: String,
        x: i32,
        bottom_margin: i32,
        color: Color,
    },
    TextCenter {
        text: String,
        color: Color,
    },
}

/// Keeps the commands of the most recent frame plus a presented-frame count
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pending: Vec<DrawCommand>,
    last_frame: Vec<DrawCommand>,
    pub frames: u64,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Commands of the last presented frame
    pub fn last_frame(&self) -> &[DrawCommand] {
        &self.last_frame
    }

    /// All text drawn in the last presented frame, in order
    pub fn texts(&self) -> Vec<&str> {
        self.last_frame
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } | DrawCommand::TextCenter { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl Renderer for RecordingRenderer {
    fn blit_layer(&mut self, layer: Layer, pos: IVec2) {
        self.pending.push(DrawCommand::Layer(layer, pos));
    }

    fn blit_rotated(&mut self, sprite: Sprite, top_left: DVec2, angle: f64) {
        self.pending.push(DrawCommand::Rotated {
            sprite,
            top_left,
            angle,
        });
    }

    fn text(&mut self, text: &str, x: i32, bottom_margin: i32, color: Color) {
        self.pending.push(DrawCommand::Text {
            text: text.to_string(),
            x,
            bottom_margin,
            color,
        });
    }

    fn text_center(&mut self, text: &str, color: Color) {
        self.pending.push(DrawCommand::TextCenter {
            text: text.to_string(),
            color,
        });
    }

    fn present(&mut self) {
        self.last_frame = std::mem::take(&mut self.pending);
        self.frames += 1;
    }
}
