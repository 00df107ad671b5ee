//! Indeterminate progress indicator animation state

use std::time::{Duration, Instant};

/// Progress indicator animation state
#[derive(Debug)]
pub struct ProgressState {
    /// When the indicator became visible
    pub start_time: Instant,
    /// Position of the moving segment, 0.0 (left) to 1.0 (right)
    pub position: f32,
}

impl ProgressState {
    /// Duration of one sweep across the bar
    const SWEEP_DURATION: Duration = Duration::from_millis(900);

    pub fn new() -> Self {
        Self {
            start_time: Instant::now(),
            position: 0.0,
        }
    }

    /// Update the segment position based on elapsed time
    pub fn update(&mut self) {
        self.update_at(Instant::now());
    }

    fn update_at(&mut self, now: Instant) {
        let elapsed = now.saturating_duration_since(self.start_time);
        let sweep = Self::SWEEP_DURATION.as_secs_f32();
        let sweeps = elapsed.as_secs_f32() / sweep;
        let progress = sweeps.fract();
        // Alternate direction on every sweep
        let progress = if (sweeps as u64) % 2 == 0 {
            progress
        } else {
            1.0 - progress
        };
        self.position = simple_easing::sine_in_out(progress);
    }
}

impl Default for ProgressState {
    fn default() -> Self {
        Self::new()
    }
}
