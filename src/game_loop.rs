//! Frame loop: pace, poll, step, draw

use crate::platform::{Clock, InputSource};
use crate::renderer::{Renderer, draw_frame};
use crate::sim::{Mask, Race};

/// Run frames until quit is requested or `max_frames` have been played.
/// Returns the number of frames stepped.
pub fn run_loop<M, I, C, R>(
    race: &mut Race<M>,
    input: &mut I,
    clock: &mut C,
    renderer: &mut R,
    max_frames: Option<u64>,
) -> u64
where
    M: Mask,
    I: InputSource,
    C: Clock,
    R: Renderer,
{
    let mut frames = 0;

    while max_frames.is_none_or(|max| frames < max) {
        clock.tick(race.settings.fps);

        let frame = input.poll();
        if !race.step(&frame, clock.now()) {
            break;
        }
        draw_frame(renderer, race, clock.now());
        frames += 1;
    }

    frames
}
