//! Level progression and the per-level timer

use serde::{Deserialize, Serialize};

use crate::consts::LEVELS;

/// Level counter and timer state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameInfo {
    /// Current level, starting at 1
    pub level: u32,
    /// Number of levels to clear
    pub levels: u32,
    /// Whether the level timer is running
    pub started: bool,
    /// Clock reading (seconds) when the level started
    pub level_start_time: f64,
}

impl Default for GameInfo {
    fn default() -> Self {
        Self::new(LEVELS)
    }
}

impl GameInfo {
    pub fn new(levels: u32) -> Self {
        Self {
            level: 1,
            levels,
            started: false,
            level_start_time: 0.0,
        }
    }

    pub fn start_level(&mut self, now: f64) {
        self.started = true;
        self.level_start_time = now;
        log::info!("Level {} started", self.level);
    }

    /// Move to the next level and wait for the start key again
    pub fn next_level(&mut self) {
        self.level += 1;
        self.started = false;
    }

    pub fn reset(&mut self) {
        self.level = 1;
        self.started = false;
        self.level_start_time = 0.0;
    }

    /// True once the last level has been cleared
    pub fn game_finished(&self) -> bool {
        self.level > self.levels
    }

    /// Whole seconds since the level started (ties round to even), or 0
    /// while waiting to start
    pub fn level_time(&self, now: f64) -> u64 {
        if !self.started {
            return 0;
        }
        (now - self.level_start_time).max(0.0).round_ties_even() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_waits_on_level_one() {
        let info = GameInfo::default();
        assert_eq!(info.level, 1);
        assert!(!info.started);
        assert_eq!(info.levels, 10);
    }

    #[test]
    fn test_time_is_zero_until_started() {
        let info = GameInfo::default();
        assert_eq!(info.level_time(0.0), 0);
        assert_eq!(info.level_time(12_345.6), 0);
    }

    #[test]
    fn test_level_time_rounds() {
        let mut info = GameInfo::default();
        info.start_level(100.0);
        assert_eq!(info.level_time(100.4), 0);
        assert_eq!(info.level_time(103.6), 4);
        // Half-way ties go to the even second
        assert_eq!(info.level_time(102.5), 2);
        assert_eq!(info.level_time(103.5), 4);
    }

    #[test]
    fn test_next_level_stops_timer() {
        let mut info = GameInfo::default();
        info.start_level(5.0);
        info.next_level();
        assert_eq!(info.level, 2);
        assert!(!info.started);
        assert_eq!(info.level_time(50.0), 0);
    }

    #[test]
    fn test_reset() {
        let mut info = GameInfo::default();
        info.next_level();
        info.next_level();
        info.start_level(9.0);
        info.reset();
        assert_eq!(info, GameInfo::default());
    }

    #[test]
    fn test_game_finished_only_past_last_level() {
        let mut info = GameInfo::default();
        for level in 1..=10 {
            assert_eq!(info.level, level);
            assert!(!info.game_finished());
            info.next_level();
        }
        assert_eq!(info.level, 11);
        assert!(info.game_finished());
    }
}
