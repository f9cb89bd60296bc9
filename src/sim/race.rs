//! Per-frame race orchestration
//!
//! A race is always in one of three phases:
//! - `AwaitingStart`: nothing moves until a key is pressed
//! - `Playing`: both cars drive, collisions decide the outcome of the level
//! - `ShowingOutcome`: the loss/victory message is held, input is ignored,
//!   and the whole game resets to level 1 when the pause runs out

use glam::{DVec2, IVec2};
use serde::{Deserialize, Serialize};

use super::car::{PlayerCar, Rotation};
use super::collision::{Mask, TrackMasks};
use super::game_info::GameInfo;
use super::steering::ComputerCar;
use crate::consts::*;
use crate::settings::Settings;

/// Key state for a single frame (deterministic)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameInput {
    pub left: bool,
    pub right: bool,
    /// Throttle
    pub forward: bool,
    /// Brake/reverse
    pub backward: bool,
    /// A key went down this frame
    pub any_key: bool,
    /// Window close requested
    pub quit: bool,
}

/// How a round ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// The computer car crossed the finish line first
    Lost,
    /// Every level cleared
    Won,
}

impl Outcome {
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Lost => "You lost!",
            Outcome::Won => "You won the game!",
        }
    }
}

/// HUD values as they stood at the start of a frame
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HudSnapshot {
    pub level: u32,
    /// Whole seconds on the level timer
    pub level_time: u64,
    pub player_vel: f64,
}

/// Current phase of the race
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for any key to start the current level
    AwaitingStart,
    /// Active driving
    Playing,
    /// Outcome message on screen until the clock reaches `until`. The HUD
    /// stays frozen on `hud`, the last frame drawn before the round ended.
    ShowingOutcome {
        outcome: Outcome,
        until: f64,
        hud: HudSnapshot,
    },
}

/// What a single playing frame produced
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameEvent {
    /// Nothing notable
    None,
    /// Player bounced off the border or the wrong side of the finish
    Bounced,
    /// Player crossed the finish line and moved up a level
    LevelCleared,
    /// Round over
    RoundOver(Outcome),
}

/// Owns every piece of game state for the life of the process
#[derive(Debug, Clone)]
pub struct Race<M> {
    pub info: GameInfo,
    pub player: PlayerCar,
    pub computer: ComputerCar,
    pub masks: TrackMasks<M>,
    pub phase: Phase,
    pub settings: Settings,
}

impl<M: Mask> Race<M> {
    /// Race on the stock track path
    pub fn new(settings: Settings, masks: TrackMasks<M>) -> Self {
        Self::with_path(settings, masks, PATH.to_vec())
    }

    pub fn with_path(settings: Settings, masks: TrackMasks<M>, path: Vec<IVec2>) -> Self {
        let player_start = DVec2::new(PLAYER_START.0, PLAYER_START.1);
        let computer_start = DVec2::new(COMPUTER_START.0, COMPUTER_START.1);

        Self {
            info: GameInfo::new(settings.levels),
            player: PlayerCar::new(settings.player, player_start, CAR_SIZE),
            computer: ComputerCar::new(
                settings.computer,
                computer_start,
                CAR_SIZE,
                path,
                settings.level_speedup,
            ),
            masks,
            phase: Phase::AwaitingStart,
            settings,
        }
    }

    /// Advance one frame. Returns `false` once the player asked to quit.
    pub fn step(&mut self, input: &FrameInput, now: f64) -> bool {
        if input.quit {
            log::info!("Quit requested");
            return false;
        }

        match self.phase {
            Phase::AwaitingStart => {
                if input.any_key {
                    self.info.start_level(now);
                    self.phase = Phase::Playing;
                    self.play_frame(input, now);
                }
            }
            Phase::Playing => {
                self.play_frame(input, now);
            }
            Phase::ShowingOutcome { until, .. } => {
                if now >= until {
                    self.reset_round();
                }
            }
        }

        true
    }

    /// Drive both cars and resolve collisions for one frame
    pub fn play_frame(&mut self, input: &FrameInput, now: f64) -> FrameEvent {
        let hud = self.hud(now);
        self.move_player(input);
        self.computer.advance();

        let mut event = self.handle_collisions();

        if event == FrameEvent::LevelCleared {
            if self.info.game_finished() {
                event = FrameEvent::RoundOver(Outcome::Won);
            } else {
                self.phase = Phase::AwaitingStart;
            }
        }

        if let FrameEvent::RoundOver(outcome) = event {
            match outcome {
                Outcome::Lost => {
                    log::info!("Computer car finished first on level {}", self.info.level)
                }
                Outcome::Won => log::info!("All {} levels cleared", self.info.levels),
            }
            self.phase = Phase::ShowingOutcome {
                outcome,
                until: now + self.settings.outcome_pause_secs,
                hud,
            };
        }

        event
    }

    fn move_player(&mut self, input: &FrameInput) {
        let mut moved = false;

        if input.left {
            self.player.car.rotate(Rotation::Left);
        }
        if input.right {
            self.player.car.rotate(Rotation::Right);
        }

        if input.forward {
            moved = true;
            self.player.car.move_forward();
        }
        if input.backward {
            moved = true;
            self.player.car.move_backward();
        }

        if !moved {
            self.player.reduce_speed();
        }
    }

    /// Border, then computer at the finish, then player at the finish
    fn handle_collisions(&mut self) -> FrameEvent {
        let mut event = FrameEvent::None;

        if self.masks.player_hits_border(&self.player.car).is_some() {
            log::trace!("Player bounced off the border at {}", self.player.car.pos);
            self.player.bounce();
            event = FrameEvent::Bounced;
        }

        if self.masks.computer_hits_finish(&self.computer.car).is_some() {
            return FrameEvent::RoundOver(Outcome::Lost);
        }

        if let Some(point) = self.masks.player_hits_finish(&self.player.car) {
            if point.y == 0 {
                // Touching the top row means crossing from the wrong side. The
                // first hit comes from a row-major scan (see `BitMask::overlap`);
                // masks that scan in column strips can pick a different first
                // pixel for irregular sprites straddling a strip edge.
                log::trace!("Player hit the finish line from the wrong side");
                self.player.bounce();
                event = FrameEvent::Bounced;
            } else {
                self.info.next_level();
                self.player.reset();
                self.computer.next_level(self.info.level);
                log::info!(
                    "Level cleared, now on level {} (computer speed {:.1})",
                    self.info.level,
                    self.computer.car.vel
                );
                event = FrameEvent::LevelCleared;
            }
        }

        event
    }

    /// Back to level 1 with both cars on the start line.
    ///
    /// The computer car is only reset (stationary, waypoint cursor kept); it
    /// moves again once the player clears a level and re-arms it.
    pub fn reset_round(&mut self) {
        self.info.reset();
        self.player.reset();
        self.computer.reset();
        self.phase = Phase::AwaitingStart;
        log::info!("Round reset, back to level 1");
    }

    /// Live HUD values
    pub fn hud(&self, now: f64) -> HudSnapshot {
        HudSnapshot {
            level: self.info.level,
            level_time: self.info.level_time(now),
            player_vel: self.player.car.vel,
        }
    }

    /// Outcome currently on screen, if any
    pub fn outcome(&self) -> Option<Outcome> {
        match self.phase {
            Phase::ShowingOutcome { outcome, .. } => Some(outcome),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::platform::BitMask;

    fn masks(border: BitMask) -> TrackMasks<BitMask> {
        TrackMasks {
            border,
            finish: BitMask::filled(FINISH_SIZE.0, FINISH_SIZE.1),
            finish_offset: FINISH_POSITION,
            player: BitMask::filled(CAR_SIZE.0, CAR_SIZE.1),
            computer: BitMask::filled(CAR_SIZE.0, CAR_SIZE.1),
        }
    }

    fn race() -> Race<BitMask> {
        Race::new(
            Settings::default(),
            masks(BitMask::empty(TRACK_WIDTH, TRACK_HEIGHT)),
        )
    }

    fn started_race() -> Race<BitMask> {
        let mut race = race();
        let start = FrameInput {
            any_key: true,
            ..Default::default()
        };
        assert!(race.step(&start, 0.0));
        assert_eq!(race.phase, Phase::Playing);
        race
    }

    fn idle() -> FrameInput {
        FrameInput::default()
    }

    #[test]
    fn test_nothing_moves_before_start() {
        let mut race = race();
        let forward = FrameInput {
            forward: true,
            ..Default::default()
        };
        for frame in 0..10 {
            assert!(race.step(&forward, frame as f64));
        }
        assert_eq!(race.phase, Phase::AwaitingStart);
        assert_eq!(race.player.car.pos, race.player.car.start_pos);
        assert_eq!(race.computer.car.pos, race.computer.car.start_pos);
        assert_eq!(race.info.level_time(10.0), 0);
    }

    #[test]
    fn test_start_key_plays_the_same_frame() {
        let mut race = race();
        let input = FrameInput {
            any_key: true,
            forward: true,
            ..Default::default()
        };
        race.step(&input, 3.0);
        assert_eq!(race.phase, Phase::Playing);
        assert!(race.info.started);
        assert_eq!(race.info.level_start_time, 3.0);
        assert_eq!(race.player.car.vel, 0.1);
        assert!(race.player.car.pos.y < 200.0);
        assert!(race.computer.car.pos.y < 200.0);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let mut race = started_race();
        race.player.car.vel = 0.0;
        race.player.car.pos = race.player.car.start_pos;
        let input = FrameInput {
            left: true,
            right: true,
            forward: true,
            backward: true,
            ..Default::default()
        };
        race.step(&input, 1.0);
        assert_eq!(race.player.car.angle, 0.0);
        assert!(race.player.car.vel.abs() < 1e-12);
    }

    #[test]
    fn test_border_bounce() {
        let mut border = BitMask::empty(TRACK_WIDTH, TRACK_HEIGHT);
        border.fill_rect(300, 100, 50, 50);
        let mut race = Race::new(Settings::default(), masks(border));
        race.step(
            &FrameInput {
                any_key: true,
                ..Default::default()
            },
            0.0,
        );

        race.player.car.pos = DVec2::new(310.0, 120.0);
        race.player.car.vel = 2.0;
        let event = race.play_frame(&idle(), 1.0);

        assert_eq!(event, FrameEvent::Bounced);
        let expected = -(2.0 - 0.05) * 0.75;
        assert!((race.player.car.vel - expected).abs() < 1e-12);
        assert_eq!(race.phase, Phase::Playing);
    }

    #[test]
    fn test_computer_at_finish_loses_the_round() {
        let mut race = started_race();
        race.info.level = 3;
        race.player.car.pos = DVec2::new(400.0, 400.0);
        race.computer.car.pos = DVec2::new(150.0, 240.0);
        race.computer.current_point = 5;

        race.step(&idle(), 10.0);
        assert_eq!(race.outcome(), Some(Outcome::Lost));

        // Frozen while the message is up
        let forward = FrameInput {
            forward: true,
            ..Default::default()
        };
        let player_pos = race.player.car.pos;
        race.step(&forward, 12.0);
        assert_eq!(race.player.car.pos, player_pos);
        assert_eq!(race.outcome(), Some(Outcome::Lost));

        // Pause over: everything back to level 1
        race.step(&idle(), 15.0);
        assert_eq!(race.phase, Phase::AwaitingStart);
        assert_eq!(race.info.level, 1);
        assert!(!race.info.started);
        assert_eq!(race.player.car.pos, race.player.car.start_pos);
        assert_eq!(race.player.car.vel, 0.0);
        // Computer car is parked, not re-armed: the cursor stays where it was
        assert_eq!(race.computer.car.pos, race.computer.car.start_pos);
        assert_eq!(race.computer.car.angle, 0.0);
        assert_eq!(race.computer.car.vel, 0.0);
        assert_eq!(race.computer.current_point, 5);

        // It stays on the start line through the next level 1
        race.step(
            &FrameInput {
                any_key: true,
                ..Default::default()
            },
            16.0,
        );
        race.step(&idle(), 16.5);
        assert_eq!(race.computer.car.pos, race.computer.car.start_pos);
        assert_eq!(race.computer.current_point, 5);
    }

    #[test]
    fn test_wrong_way_finish_bounces() {
        let mut race = started_race();
        // Offset (20, -10): the car covers the top row of the finish line
        race.player.car.pos = DVec2::new(150.0, 240.0);
        race.player.car.vel = 0.0;

        let event = race.play_frame(&idle(), 1.0);
        assert_eq!(event, FrameEvent::Bounced);
        assert_eq!(race.info.level, 1);
        assert_eq!(race.phase, Phase::Playing);
    }

    #[test]
    fn test_crossing_finish_clears_level() {
        let mut race = started_race();
        // Offset (20, 5): first overlap is on row 5
        race.player.car.pos = DVec2::new(150.0, 255.0);
        race.player.car.vel = 0.0;

        let event = race.play_frame(&idle(), 1.0);
        assert_eq!(event, FrameEvent::LevelCleared);
        assert_eq!(race.info.level, 2);
        assert!(!race.info.started);
        assert_eq!(race.phase, Phase::AwaitingStart);
        assert_eq!(race.player.car.pos, race.player.car.start_pos);
        assert_eq!(race.computer.car.pos, race.computer.car.start_pos);
        assert_eq!(race.computer.current_point, 0);
        assert!((race.computer.car.vel - 2.2).abs() < 1e-12);
    }

    #[test]
    fn test_clearing_last_level_wins_then_resets() {
        let mut race = started_race();
        race.info.level = 10;
        race.player.car.pos = DVec2::new(150.0, 255.0);
        race.player.car.vel = 0.0;

        race.step(&idle(), 20.0);
        assert_eq!(race.info.level, 11);
        assert_eq!(race.outcome(), Some(Outcome::Won));

        race.step(&idle(), 24.9);
        assert_eq!(race.outcome(), Some(Outcome::Won));

        race.step(&idle(), 25.0);
        assert_eq!(race.phase, Phase::AwaitingStart);
        assert_eq!(race.info.level, 1);
        assert_eq!(race.computer.car.vel, 0.0);
        assert_eq!(race.computer.car.pos, race.computer.car.start_pos);
        assert_eq!(race.computer.current_point, 0);
    }

    #[test]
    fn test_quit_in_every_phase() {
        let quit = FrameInput {
            quit: true,
            ..Default::default()
        };

        let mut race = race();
        assert!(!race.step(&quit, 0.0));

        let mut race = started_race();
        assert!(!race.step(&quit, 1.0));

        race.phase = Phase::ShowingOutcome {
            outcome: Outcome::Lost,
            until: 100.0,
            hud: race.hud(2.0),
        };
        assert!(!race.step(&quit, 2.0));
    }
}
