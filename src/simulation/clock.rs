//! Spawn scheduling
//!
//! Once per frame the clock decides whether the cathode releases a new
//! electron, either every N frames or once a wall-clock interval has passed,
//! and never while the live set is at its cap.

use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SpawnSchedule {
    /// Spawn on frames where `frame % n == 0`
    EveryNFrames(u64),
    /// Spawn once more than the interval has elapsed since the last spawn;
    /// `None` disables spawning
    Interval(Option<Duration>),
}

impl SpawnSchedule {
    /// Beam density 1..=10 maps to an interval of 11..=2 frames
    pub fn from_beam_density(density: f64) -> Self {
        let frames = (12.0 - density.round()).clamp(2.0, 11.0);
        SpawnSchedule::EveryNFrames(frames as u64)
    }

    /// Electrons per second; zero (or less) switches the emitter off
    pub fn from_flow_rate(rate: f64) -> Self {
        if rate > 0.0 {
            SpawnSchedule::Interval(Some(Duration::from_secs_f64(1.0 / rate)))
        } else {
            SpawnSchedule::Interval(None)
        }
    }
}

#[derive(Debug, Clone)]
pub struct SimulationClock {
    schedule: SpawnSchedule,
    cap: usize,
    frame: u64,            // frames ticked so far
    since_spawn: Duration, // time since the last spawn
}

impl SimulationClock {
    pub fn new(schedule: SpawnSchedule, cap: usize) -> Self {
        Self {
            schedule,
            cap,
            frame: 0,
            since_spawn: Duration::ZERO,
        }
    }

    /// Swap the schedule after a slider change; the elapsed timer keeps running
    pub fn set_schedule(&mut self, schedule: SpawnSchedule) {
        self.schedule = schedule;
    }

    /// Advance by one frame that took `dt`; returns whether to spawn now
    pub fn tick(&mut self, dt: Duration, live: usize) -> bool {
        let frame = self.frame;
        self.frame += 1;
        self.since_spawn += dt;

        let due = match self.schedule {
            SpawnSchedule::EveryNFrames(n) => n > 0 && frame % n == 0,
            SpawnSchedule::Interval(Some(interval)) => self.since_spawn > interval,
            SpawnSchedule::Interval(None) => false,
        };

        if !due || live >= self.cap {
            return false;
        }

        self.since_spawn = Duration::ZERO;
        true
    }
}
