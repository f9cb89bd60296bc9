//! Per-frame input

use std::collections::VecDeque;

pub use crate::sim::FrameInput;

/// Anything that can report input once per frame
pub trait InputSource {
    fn poll(&mut self) -> FrameInput;
}

/// Replays a fixed list of frames, then idles (or quits)
#[derive(Debug, Clone, Default)]
pub struct ScriptedInput {
    frames: VecDeque<FrameInput>,
    quit_when_done: bool,
}

impl ScriptedInput {
    pub fn new(frames: impl IntoIterator<Item = FrameInput>) -> Self {
        Self {
            frames: frames.into_iter().collect(),
            quit_when_done: false,
        }
    }

    /// Report `quit` once the script runs out
    pub fn quit_when_done(mut self) -> Self {
        self.quit_when_done = true;
        self
    }

    #[cfg(test)]
    pub fn remaining(&self) -> usize {
        self.frames.len()
    }
}

impl InputSource for ScriptedInput {
    fn poll(&mut self) -> FrameInput {
        match self.frames.pop_front() {
            Some(frame) => frame,
            None => FrameInput {
                quit: self.quit_when_done,
                ..Default::default()
            },
        }
    }
}
