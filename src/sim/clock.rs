//! Frame clock
//!
//! The only place that sees host timestamps. Everything downstream is
//! driven by the deltas it hands out.

/// Converts host timestamps (milliseconds) into simulated deltas (seconds)
#[derive(Debug, Clone)]
pub struct FrameClock {
    last_ms: f64,
    max_delta: f32,
}

impl FrameClock {
    pub fn new(start_ms: f64, max_delta: f32) -> Self {
        Self {
            last_ms: start_ms,
            max_delta,
        }
    }

    /// Seconds since the previous call, never negative and capped at `max_delta`
    pub fn delta(&mut self, now_ms: f64) -> f32 {
        let dt = ((now_ms - self.last_ms) / 1000.0) as f32;
        self.last_ms = now_ms;
        dt.clamp(0.0, self.max_delta)
    }
}
