//! Browser frame timing
//!
//! Elapsed time comes from `performance.now()`.

/// Seconds since page load
pub fn now_seconds() -> f64 {
    web_sys::window()
        .and_then(|w| w.performance())
        .map(|p| p.now() / 1000.0)
        .unwrap_or(0.0)
}

/// Reference frame rate the clock speed is calibrated against
const REFERENCE_FPS: f64 = 60.0;
/// Cap on frames credited to one repaint (tab switches, debugger pauses)
const MAX_FRAMES_PER_TICK: f64 = 4.0;

/// Converts wall-clock time between repaints into reference frames.
#[derive(Default)]
pub struct FrameTimer {
    last: Option<f64>,
}

impl FrameTimer {
    /// Reference frames elapsed since the previous call (1.0 on the first call).
    pub fn tick(&mut self) -> f64 {
        let now = now_seconds();
        let frames = match self.last {
            Some(last) => ((now - last) * REFERENCE_FPS).clamp(0.0, MAX_FRAMES_PER_TICK),
            None => 1.0,
        };
        self.last = Some(now);
        frames
    }
}
