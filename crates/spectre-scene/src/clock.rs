//! Animation clock and the pure wave helpers every animated value is built from.
//!
//! The clock only counts. Wall-clock pacing lives in the scene loop, so any
//! tick can be rendered by building a scene at that tick directly.

use std::time::Duration;

use spectre_core::types::FrameTime;

/// Gap-free tick counter with explicit start/stop.
#[derive(Debug, Clone)]
pub struct AnimationClock {
    tick: u64,
    period_ms: u64,
    running: bool,
}

impl AnimationClock {
    /// A stopped clock at tick 0.
    pub fn new(period_ms: u64) -> Self {
        Self {
            tick: 0,
            period_ms,
            running: false,
        }
    }

    pub fn start(&mut self) {
        self.running = true;
    }

    /// Stop advancing. The tick value is kept.
    pub fn stop(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Advance by exactly one tick if running. Returns whether it advanced.
    pub fn advance(&mut self) -> bool {
        if self.running {
            self.tick = self.tick.wrapping_add(1);
        }
        self.running
    }

    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn time(&self) -> FrameTime {
        FrameTime::at(self.tick, self.period_ms)
    }

    /// Nominal wall-clock duration of one tick.
    pub fn period(&self) -> Duration {
        Duration::from_millis(self.period_ms)
    }
}

/// `sin(t * speed + phase)`.
#[inline]
pub fn wave(t: f64, speed: f64, phase: f64) -> f64 {
    (t * speed + phase).sin()
}

/// `base + sin(t * speed + phase) * amplitude`.
#[inline]
pub fn oscillate(base: f64, amplitude: f64, t: f64, speed: f64, phase: f64) -> f64 {
    base + wave(t, speed, phase) * amplitude
}

/// Triangle wave between `lo` and `hi` over `period_ms`, starting at `lo`.
pub fn triangle(elapsed_ms: u64, period_ms: u64, lo: f64, hi: f64) -> f64 {
    if period_ms == 0 {
        return lo;
    }
    let phase = (elapsed_ms % period_ms) as f64 / period_ms as f64;
    lo + (hi - lo) * (1.0 - (2.0 * phase - 1.0).abs())
}
