use std::time::{Duration, Instant};

/// Per-frame timing handed to application callbacks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameState {
    /// Milliseconds since the clock started. Monotonic; this is the
    /// timestamp the tween driver is advanced with.
    pub time_ms: f64,
    /// Seconds since the previous frame.
    pub dt: f32,
    /// Frames ticked before this one.
    pub frame_count: u64,
}

/// Monotonic clock for frame timing.
#[derive(Debug, Clone)]
pub struct FrameClock {
    start_time: Instant,
    last_update: Instant,
    /// Time between the last two ticks
    pub delta: Duration,
    /// Total elapsed time at the last tick
    pub elapsed: Duration,
    /// Total number of ticks
    pub frame_count: u64,
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

impl FrameClock {
    /// Creates a clock starting from now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start_time: now,
            last_update: now,
            delta: Duration::ZERO,
            elapsed: Duration::ZERO,
            frame_count: 0,
        }
    }

    /// Restarts the clock at zero.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Advances the clock and returns the state of the new frame.
    pub fn tick(&mut self) -> FrameState {
        let now = Instant::now();
        self.delta = now - self.last_update;
        self.elapsed = now - self.start_time;
        self.last_update = now;

        let state = FrameState {
            time_ms: self.elapsed.as_secs_f64() * 1000.0,
            dt: self.delta.as_secs_f32(),
            frame_count: self.frame_count,
        };
        self.frame_count += 1;
        state
    }
}
