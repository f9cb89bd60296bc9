//! Frame clock

use std::time::{Duration, Instant};

/// Frame pacing plus a monotonic seconds reading
pub trait Clock {
    /// Block until at least `1 / fps` seconds have passed since the previous
    /// tick. Returns the seconds actually elapsed.
    fn tick(&mut self, fps: u32) -> f64;

    /// Seconds since the clock was created (sub-second precision)
    fn now(&self) -> f64;
}

/// Wall-clock implementation that sleeps off the rest of each frame
#[derive(Debug)]
pub struct SystemClock {
    start: Instant,
    last_tick: Instant,
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl SystemClock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }
}

impl Clock for SystemClock {
    fn tick(&mut self, fps: u32) -> f64 {
        let frame = Duration::from_secs_f64(1.0 / fps.max(1) as f64);
        let elapsed = self.last_tick.elapsed();
        if elapsed < frame {
            std::thread::sleep(frame - elapsed);
        }

        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f64();
        self.last_tick = now;
        dt
    }

    fn now(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// Deterministic clock: each tick advances exactly one frame
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: f64,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn advance(&mut self, secs: f64) {
        self.now += secs;
    }
}

impl Clock for ManualClock {
    fn tick(&mut self, fps: u32) -> f64 {
        let dt = 1.0 / fps.max(1) as f64;
        self.now += dt;
        dt
    }

    fn now(&self) -> f64 {
        self.now
    }
}
