use std::time::{Duration, Instant};

/// Wall-clock stopwatch used for phase timings in logs.
///
/// `lap` measures a single phase while `elapsed` keeps counting from
/// construction, so one timer can report both per-phase and total
/// durations.
#[derive(Clone, Debug)]
pub struct Timer {
    start: Instant,
    lap: Instant,
}

impl Timer {
    pub fn new() -> Self {
        let now = Instant::now();
        Timer {
            start: now,
            lap: now,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> u64 {
        self.elapsed().as_millis() as u64
    }

    pub fn elapsed_s(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }

    /// Returns the time since the previous lap (or construction) and
    /// starts a new lap.
    pub fn lap(&mut self) -> Duration {
        let now = Instant::now();
        let lap = now.duration_since(self.lap);
        self.lap = now;
        lap
    }

    /// Items per second since construction. Zero when no measurable
    /// time has passed.
    pub fn rate(&self, items: usize) -> f64 {
        let secs = self.elapsed_s();
        if secs > 0.0 {
            items as f64 / secs
        } else {
            0.0
        }
    }
}

impl Default for Timer {
    fn default() -> Self {
        Timer::new()
    }
}
