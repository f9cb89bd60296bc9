//! Track Racer entry point
//!
//! Runs a headless session: synthetic masks stand in for the track artwork,
//! the player sits idle and the computer car drives its waypoint path until
//! the round ends or the frame budget runs out.

use std::path::Path;

use track_racer::consts::*;
use track_racer::platform::{BitMask, FrameInput, ManualClock, ScriptedInput};
use track_racer::renderer::RecordingRenderer;
use track_racer::sim::{Phase, TrackMasks};
use track_racer::{Race, Settings, run_loop};

/// Ten minutes of play at the default frame rate
const FRAME_BUDGET: u64 = 60 * 60 * 10;

fn main() {
    env_logger::init();
    log::info!("Track Racer (headless) starting...");

    let settings = match std::env::args().nth(1) {
        Some(path) => Settings::load_from(Path::new(&path)),
        None => {
            log::info!("Using default settings");
            Settings::default()
        }
    };

    let mut race = Race::new(settings, synthetic_track());

    let start = FrameInput {
        any_key: true,
        ..Default::default()
    };
    let mut input = ScriptedInput::new([start]);
    let mut clock = ManualClock::new();
    let mut renderer = RecordingRenderer::new();

    // Stop as soon as the first round is decided
    let mut frames = 0;
    while frames < FRAME_BUDGET {
        frames += run_loop(&mut race, &mut input, &mut clock, &mut renderer, Some(1));
        if matches!(race.phase, Phase::ShowingOutcome { .. }) {
            break;
        }
    }

    match race.outcome() {
        Some(outcome) => log::info!("{} after {} frames", outcome.message(), frames),
        None => log::info!(
            "No result after {} frames (computer at waypoint {}/{})",
            frames,
            race.computer.current_point,
            race.computer.path.len()
        ),
    }
    log::info!("Last frame: {:?}", renderer.texts());
}

/// Open track with only the screen edge as a border, a solid finish strip and
/// rectangular car masks
fn synthetic_track() -> TrackMasks<BitMask> {
    let mut border = BitMask::empty(TRACK_WIDTH, TRACK_HEIGHT);
    border.fill_rect(0, 0, TRACK_WIDTH, 1);
    border.fill_rect(0, TRACK_HEIGHT as i32 - 1, TRACK_WIDTH, 1);
    border.fill_rect(0, 0, 1, TRACK_HEIGHT);
    border.fill_rect(TRACK_WIDTH as i32 - 1, 0, 1, TRACK_HEIGHT);

    TrackMasks {
        border,
        finish: BitMask::filled(FINISH_SIZE.0, FINISH_SIZE.1),
        finish_offset: FINISH_POSITION,
        player: BitMask::filled(CAR_SIZE.0, CAR_SIZE.1),
        computer: BitMask::filled(CAR_SIZE.0, CAR_SIZE.1),
    }
}
