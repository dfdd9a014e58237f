//! Frame clock for the showcase loop.
//!
//! One source of truth for elapsed and delta time, driven once per frame by
//! the orchestrator. Supports a fixed delta for deterministic stepping
//! (tests, offline rendering) and a time scale for slowing or speeding the
//! whole show.

use std::time::{Duration, Instant};

/// Frame timing: elapsed, delta, frame count.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_frame: Instant,
    elapsed_secs: f32,
    delta_secs: f32,
    frame_count: u64,
    /// Fixed delta for deterministic updates, overriding wall time.
    fixed_delta: Option<f32>,
    /// Playback speed multiplier (1.0 = real time).
    time_scale: f32,
}

impl Clock {
    /// A clock starting from now.
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_frame: now,
            elapsed_secs: 0.0,
            delta_secs: 0.0,
            frame_count: 0,
            fixed_delta: None,
            time_scale: 1.0,
        }
    }

    /// Advance one frame. Returns the delta in seconds.
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let raw_delta = now.duration_since(self.last_frame).as_secs_f32();
        self.delta_secs = self.fixed_delta.unwrap_or(raw_delta) * self.time_scale;
        self.elapsed_secs += self.delta_secs;
        self.last_frame = now;
        self.frame_count += 1;
        self.delta_secs
    }

    /// Total scaled time in seconds since the clock started.
    #[inline]
    pub fn elapsed(&self) -> f32 {
        self.elapsed_secs
    }

    /// Last frame's delta in seconds.
    #[inline]
    pub fn delta(&self) -> f32 {
        self.delta_secs
    }

    /// Frames ticked since start.
    #[inline]
    pub fn frame(&self) -> u64 {
        self.frame_count
    }

    /// Override wall-clock deltas with a fixed step. `None` restores real
    /// timing.
    pub fn set_fixed_delta(&mut self, delta: Option<f32>) {
        self.fixed_delta = delta;
    }

    /// Set the playback speed multiplier. Clamped at 0.
    pub fn set_time_scale(&mut self, scale: f32) {
        self.time_scale = scale.max(0.0);
    }

    /// Wall time since the clock was created, unscaled.
    pub fn wall_elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}
