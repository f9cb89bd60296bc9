//! Per-frame scene: background, HUD, cars, phase message

use glam::IVec2;

use super::{HUD_COLOR, Layer, MESSAGE_COLOR, Renderer, Sprite};
use crate::sim::{Mask, Phase, Race};

/// HUD text inset from the left edge
const HUD_X: i32 = 10;

/// Issue every draw command for the current race state and present it
pub fn draw_frame<M: Mask, R: Renderer>(renderer: &mut R, race: &Race<M>, now: f64) {
    renderer.blit_layer(Layer::Ground, IVec2::ZERO);
    renderer.blit_layer(Layer::Track, IVec2::ZERO);
    renderer.blit_layer(Layer::Finish, race.masks.finish_offset);
    renderer.blit_layer(Layer::TrackBorder, IVec2::ZERO);

    // The HUD holds still while an outcome message is up
    let hud = match race.phase {
        Phase::ShowingOutcome { hud, .. } => hud,
        _ => race.hud(now),
    };
    renderer.text(&format!("Level {}", hud.level), HUD_X, 70, HUD_COLOR);
    renderer.text(
        &format!("Time: {}s", hud.level_time),
        HUD_X,
        40,
        HUD_COLOR,
    );
    renderer.text(
        &format!("Vel: {:.1}px/s", hud.player_vel),
        HUD_X,
        10,
        HUD_COLOR,
    );

    let player = &race.player.car;
    renderer.blit_rotated(Sprite::PlayerCar, player.pos, player.angle);
    let computer = &race.computer.car;
    renderer.blit_rotated(Sprite::ComputerCar, computer.pos, computer.angle);

    match race.phase {
        Phase::AwaitingStart => renderer.text_center(
            &format!("Press any key to start level {}!", race.info.level),
            MESSAGE_COLOR,
        ),
        Phase::ShowingOutcome { outcome, .. } => {
            renderer.text_center(outcome.message(), MESSAGE_COLOR)
        }
        Phase::Playing => {}
    }

    renderer.present();
}
