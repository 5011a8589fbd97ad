use std::cell::Cell;
use std::time::Instant;

/// Source of monotonic time for the animation driver.
///
/// The driver only ever reads a seconds value; swapping the clock lets tests
/// step time deterministically.
pub trait Clock {
    /// Monotonic seconds since some fixed epoch.
    fn seconds(&self) -> f64;
}

/// Wall-clock time via [`Instant`], anchored at construction.
pub struct SystemClock {
    start: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self { start: Instant::now() }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn seconds(&self) -> f64 {
        self.start.elapsed().as_secs_f64()
    }
}

/// A hand-stepped clock for deterministic driver tests.
pub struct ManualClock {
    now: Cell<f64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self { now: Cell::new(0.0) }
    }

    pub fn advance(&self, dt: f64) {
        self.now.set(self.now.get() + dt);
    }

    pub fn set(&self, t: f64) {
        self.now.set(t);
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for ManualClock {
    fn seconds(&self) -> f64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.seconds();
        let b = clock.seconds();
        assert!(b >= a);
    }

    #[test]
    fn test_manual_clock_steps() {
        let clock = ManualClock::new();
        assert_eq!(clock.seconds(), 0.0);
        clock.advance(0.25);
        clock.advance(0.25);
        assert_eq!(clock.seconds(), 0.5);
        clock.set(3.0);
        assert_eq!(clock.seconds(), 3.0);
    }
}
