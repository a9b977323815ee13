//! Per-keystroke timing.
//!
//! Every keystroke attempt, accepted or not, closes the running interval
//! and opens the next one. The first interval of a phrase runs from an
//! explicit `start`; without one, the first keystroke only starts the clock.

use std::time::{Duration, Instant};

#[derive(Debug, Clone, Default)]
pub struct KeystrokeTimer {
    running_since: Option<Instant>,
    intervals: Vec<Duration>,
}

impl KeystrokeTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) measuring from now.
    pub fn start(&mut self) {
        self.start_at(Instant::now());
    }

    pub fn start_at(&mut self, now: Instant) {
        self.running_since = Some(now);
    }

    /// Stop without recording an interval.
    pub fn stop(&mut self) {
        self.running_since = None;
    }

    pub fn is_running(&self) -> bool {
        self.running_since.is_some()
    }

    /// Record the interval ending now and restart.
    pub fn lap(&mut self) -> Option<Duration> {
        self.lap_at(Instant::now())
    }

    /// Record the interval ending at `now` and restart from `now`.
    /// Returns `None` if the clock was not running.
    pub fn lap_at(&mut self, now: Instant) -> Option<Duration> {
        let elapsed = self
            .running_since
            .map(|since| now.saturating_duration_since(since));
        if let Some(d) = elapsed {
            self.intervals.push(d);
        }
        self.running_since = Some(now);
        elapsed
    }

    pub fn intervals(&self) -> &[Duration] {
        &self.intervals
    }

    /// Sum of recorded intervals.
    pub fn total(&self) -> Duration {
        self.intervals.iter().sum()
    }
}
