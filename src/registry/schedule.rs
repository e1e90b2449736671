//! Scan cadence for periodic enemy discovery.

use std::time::Duration;

use bevy::prelude::*;

use crate::constants::DEFAULT_SCAN_INTERVAL_SECS;

/// Repeating timer deciding when the registry rescans the world.
///
/// The first call to [`ScanSchedule::tick`] always fires, so the initial scan
/// happens on the first frame with no delay.
#[derive(Resource, Debug, Clone)]
pub struct ScanSchedule {
    timer: Timer,
    primed: bool,
}

impl Default for ScanSchedule {
    fn default() -> Self {
        Self::new(Duration::from_secs_f32(DEFAULT_SCAN_INTERVAL_SECS))
    }
}

impl ScanSchedule {
    /// A schedule firing immediately and then every `period`.
    #[must_use]
    pub fn new(period: Duration) -> Self {
        Self {
            timer: Timer::new(period, TimerMode::Repeating),
            primed: false,
        }
    }

    /// Changes the scan period without resetting elapsed time.
    pub fn set_period(&mut self, period: Duration) {
        if self.timer.duration() != period {
            self.timer.set_duration(period);
        }
    }

    /// Advances the timer by `delta` and reports whether a scan is due.
    pub fn tick(&mut self, delta: Duration) -> bool {
        if !self.primed {
            self.primed = true;
            return true;
        }
        self.timer.tick(delta);
        self.timer.just_finished()
    }
}
