//! Countdown timer for a single round

use crate::io::configuration::DEFAULT_TIME_LIMIT_SECS;
use crate::io::error::{Result, invalid_parameter};

/// Outcome of advancing the timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerState {
    /// Round has not been started or was stopped
    Idle,
    /// Countdown in progress
    Running,
    /// Countdown reached zero during the last tick
    Expired,
}

/// Round countdown driven by frame deltas
#[derive(Debug, Clone, PartialEq)]
pub struct RoundTimer {
    limit: f32,
    remaining: f32,
    running: bool,
}

impl RoundTimer {
    /// Create an idle timer for rounds lasting `limit` seconds
    ///
    /// # Errors
    ///
    /// Returns an error if `limit` is negative or not finite
    pub fn new(limit: f32) -> Result<Self> {
        if !limit.is_finite() || limit < 0.0 {
            return Err(invalid_parameter(
                "time_limit",
                &limit,
                &"must be a finite, non-negative number of seconds",
            ));
        }

        Ok(Self {
            limit,
            remaining: 0.0,
            running: false,
        })
    }

    /// Begin a round at the full limit
    pub const fn start(&mut self) {
        self.running = true;
        self.remaining = self.limit;
    }

    /// Advance by `dt` seconds
    ///
    /// Negative or non-finite deltas leave the countdown unchanged.
    pub fn tick(&mut self, dt: f32) -> TimerState {
        if !self.running {
            return TimerState::Idle;
        }
        if !dt.is_finite() || dt < 0.0 {
            return TimerState::Running;
        }

        self.remaining -= dt;
        if self.remaining <= 0.0 {
            self.stop();
            return TimerState::Expired;
        }
        TimerState::Running
    }

    /// End the round immediately
    pub const fn stop(&mut self) {
        self.running = false;
        self.remaining = 0.0;
    }

    /// Seconds left in the current round
    pub const fn remaining(&self) -> f32 {
        self.remaining
    }

    /// Configured round length in seconds
    pub const fn limit(&self) -> f32 {
        self.limit
    }

    /// Whether a round is in progress
    pub const fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time as shown on the countdown label
    pub fn display(&self) -> String {
        format_countdown(self.remaining)
    }
}

impl Default for RoundTimer {
    fn default() -> Self {
        Self {
            limit: DEFAULT_TIME_LIMIT_SECS,
            remaining: 0.0,
            running: false,
        }
    }
}

/// Format seconds with two decimals followed by the unit, e.g. `"9.75 s"`
pub fn format_countdown(seconds: f32) -> String {
    format!("{seconds:.2} s")
}
