//! Animation clock
//!
//! `time` counts reference frames: at [`DEFAULT_SPEED`] it advances by one
//! per rendered frame, so the orbit phase `time * gravity_speed` matches a
//! per-frame counter.

use tracing::warn;

/// Clock rate at which one frame advances `time` by exactly one
pub const DEFAULT_SPEED: f64 = 0.004;

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FrameClock {
    time: f64,
}

impl FrameClock {
    pub fn new(time: f64) -> Self {
        Self {
            time: if time.is_finite() { time } else { 0.0 },
        }
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    /// Advance by `frames` frames at `speed`. Never moves backwards.
    pub fn advance(&mut self, speed: f64, frames: f64) -> f64 {
        let delta = speed / DEFAULT_SPEED * frames;
        if delta.is_finite() && delta > 0.0 {
            self.time += delta;
        } else if delta != 0.0 {
            warn!(speed, frames, "Ignoring non-advancing clock step");
        }
        self.time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_speed_counts_frames() {
        let mut clock = FrameClock::default();
        for _ in 0..10 {
            clock.advance(DEFAULT_SPEED, 1.0);
        }
        assert!((clock.time() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_scales_with_speed() {
        let mut clock = FrameClock::new(5.0);
        clock.advance(0.02, 2.0);
        assert!((clock.time() - 15.0).abs() < 1e-9);
    }

    #[test]
    fn test_monotonic() {
        let mut clock = FrameClock::new(3.0);
        clock.advance(-0.01, 1.0);
        clock.advance(f64::NAN, 1.0);
        clock.advance(0.004, f64::INFINITY);
        assert_eq!(clock.time(), 3.0);
    }
}
