//! Wall-clock frame timing for hosts driving the rig from a render loop.

use web_time::Instant;

/// Timing values sampled by one [`FrameClock::tick`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSample {
    /// Seconds since the previous tick.
    pub dt: f32,
    /// Seconds since the clock was created or restarted.
    pub elapsed: f32,
}

/// Frame timer with smoothed FPS readout.
///
/// Uses `web_time::Instant`, which delegates to `performance.now()` on WASM,
/// so the same loop code runs natively and in the website embed.
#[derive(Debug, Clone)]
pub struct FrameClock {
    started: Instant,
    last_tick: Instant,
    /// Smoothed FPS using exponential moving average.
    smoothed_fps: f32,
    /// Smoothing factor (lower = smoother, 0.0-1.0).
    smoothing: f32,
}

impl FrameClock {
    /// Create a clock starting now.
    #[must_use]
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            started: now,
            last_tick: now,
            smoothed_fps: 60.0, // Start with reasonable default
            smoothing: 0.05,    /* 5% new value, 95% old value for smooth
                                 * display */
        }
    }

    /// Sample the clock for a new frame.
    pub fn tick(&mut self) -> FrameSample {
        let now = Instant::now();
        let dt = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;

        if dt > 0.0 {
            let instant_fps = 1.0 / dt;
            // Exponential moving average for smooth display
            self.smoothed_fps = self.smoothed_fps * (1.0 - self.smoothing)
                + instant_fps * self.smoothing;
        }

        FrameSample {
            dt,
            elapsed: now.duration_since(self.started).as_secs_f32(),
        }
    }

    /// Restart both the elapsed baseline and the tick baseline.
    pub fn restart(&mut self) {
        let now = Instant::now();
        self.started = now;
        self.last_tick = now;
    }

    /// Get the current FPS (smoothed).
    #[must_use]
    pub fn fps(&self) -> f32 {
        self.smoothed_fps
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}
