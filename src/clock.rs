use std::time::Instant;

/// Monotonic frame clock. `elapsed` is the absolute time input the update
/// step consumes; `tick` yields the per-frame delta for rate reporting.
#[derive(Debug)]
pub struct Clock {
    start: Instant,
    last_tick: Instant,
}

impl Clock {
    pub fn new() -> Self {
        let now = Instant::now();
        Self {
            start: now,
            last_tick: now,
        }
    }

    /// Seconds since the clock was created
    pub fn elapsed(&self) -> f32 {
        self.start.elapsed().as_secs_f32()
    }

    /// Seconds since the previous tick, advancing the clock
    pub fn tick(&mut self) -> f32 {
        let now = Instant::now();
        let delta = now.duration_since(self.last_tick).as_secs_f32();
        self.last_tick = now;
        delta
    }
}

impl Default for Clock {
    fn default() -> Self {
        Self::new()
    }
}

/// Averages frame deltas over a fixed window and reports frames per second
/// once per window.
#[derive(Debug)]
pub struct FpsCounter {
    window: f32,
    accumulated: f32,
    frames: u32,
}

impl FpsCounter {
    pub fn new(window: f32) -> Self {
        Self {
            window,
            accumulated: 0.0,
            frames: 0,
        }
    }

    /// Feed one frame delta; returns the average FPS when a window completes
    pub fn tick(&mut self, delta: f32) -> Option<f32> {
        self.frames += 1;
        self.accumulated += delta;

        if self.accumulated >= self.window {
            let fps = self.frames as f32 / self.accumulated;
            self.frames = 0;
            self.accumulated = 0.0;
            Some(fps)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;
    use std::time::Duration;

    #[test]
    fn clock_measures_delta() {
        let mut clock = Clock::new();

        thread::sleep(Duration::from_millis(10));
        let delta = clock.tick();

        // Should be roughly 10ms = 0.01s
        assert!(delta >= 0.009 && delta <= 0.050);
    }

    #[test]
    fn elapsed_is_monotonic() {
        let clock = Clock::new();
        let first = clock.elapsed();
        thread::sleep(Duration::from_millis(5));
        let second = clock.elapsed();
        assert!(second > first);
    }

    #[test]
    fn fps_counter_reports_once_per_window() {
        let mut fps = FpsCounter::new(1.0);

        assert_eq!(fps.tick(0.5), None);
        let report = fps.tick(0.5).expect("window complete");
        assert!((report - 2.0).abs() < 1e-3);

        // Window state resets after reporting
        assert_eq!(fps.tick(0.5), None);
    }
}
