/// Fixed timestep accumulator.
/// Keeps component logic running at a consistent rate regardless of how the
/// host's display clock paces frames.
pub struct FixedTimestep {
    /// The fixed delta time per tick.
    dt: f32,
    /// Accumulated time from variable frame deltas.
    accumulator: f32,
}

impl FixedTimestep {
    pub fn new(dt: f32) -> Self {
        Self { dt, accumulator: 0.0 }
    }

    /// Add frame time to the accumulator. Returns the number of fixed steps to run.
    pub fn accumulate(&mut self, frame_dt: f32) -> u32 {
        self.accumulator += frame_dt;
        // Cap to prevent spiral of death (max 10 steps per frame)
        self.accumulator = self.accumulator.min(self.dt * 10.0);
        let steps = (self.accumulator / self.dt) as u32;
        self.accumulator -= steps as f32 * self.dt;
        steps
    }

    /// The fixed delta time.
    pub fn dt(&self) -> f32 {
        self.dt
    }
}

/// A one-shot timed callback expressed as tick-driven state.
/// Arm it with a duration; `tick` reports expiry exactly once.
#[derive(Debug, Clone, Default)]
pub struct Countdown {
    remaining: Option<f32>,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) the countdown.
    pub fn arm(&mut self, secs: f32) {
        self.remaining = Some(secs.max(0.0));
    }

    /// Disarm without firing.
    pub fn cancel(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advance by `dt` seconds. Returns true on the tick the countdown
    /// crosses zero; afterwards it stays disarmed until re-armed.
    pub fn tick(&mut self, dt: f32) -> bool {
        match self.remaining {
            Some(left) => {
                let left = left - dt;
                if left <= 0.0 {
                    self.remaining = None;
                    true
                } else {
                    self.remaining = Some(left);
                    false
                }
            }
            None => false,
        }
    }
}

/// Trailing-edge debounce over ticks: `fire` only after a quiet period with
/// no further triggers. Re-triggering restarts the wait.
#[derive(Debug, Clone)]
pub struct Debouncer {
    delay: f32,
    countdown: Countdown,
}

impl Debouncer {
    pub fn new(delay_secs: f32) -> Self {
        Self {
            delay: delay_secs,
            countdown: Countdown::new(),
        }
    }

    /// Note a triggering event. Restarts the quiet period.
    pub fn trigger(&mut self) {
        self.countdown.arm(self.delay);
    }

    /// Advance by `dt`. Returns true once per burst of triggers, after the
    /// quiet period has elapsed.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.countdown.tick(dt)
    }

    pub fn is_pending(&self) -> bool {
        self.countdown.is_armed()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_step_exact() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0 / 60.0), 1);
    }

    #[test]
    fn accumulates_partial() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(0.008), 0);
        assert_eq!(ts.accumulate(0.010), 1);
    }

    #[test]
    fn caps_at_ten_steps() {
        let mut ts = FixedTimestep::new(1.0 / 60.0);
        assert_eq!(ts.accumulate(1.0), 10);
    }

    #[test]
    fn countdown_fires_once() {
        let mut cd = Countdown::new();
        cd.arm(0.1);
        assert!(!cd.tick(0.05));
        assert!(cd.tick(0.06));
        assert!(!cd.tick(1.0), "fired countdown must stay disarmed");
    }

    #[test]
    fn countdown_rearm_restarts() {
        let mut cd = Countdown::new();
        cd.arm(0.1);
        cd.tick(0.05);
        cd.arm(0.1);
        assert!(!cd.tick(0.06));
        assert!(cd.tick(0.05));
    }

    #[test]
    fn countdown_cancel() {
        let mut cd = Countdown::new();
        cd.arm(0.1);
        cd.cancel();
        assert!(!cd.tick(1.0));
    }

    #[test]
    fn debounce_collapses_burst() {
        let mut db = Debouncer::new(0.25);
        db.trigger();
        db.tick(0.1);
        db.trigger(); // restarts the quiet period
        assert!(!db.tick(0.2));
        assert!(db.tick(0.1));
        assert!(!db.tick(1.0), "a single burst fires once");
    }

    #[test]
    fn debounce_idle_without_trigger() {
        let mut db = Debouncer::new(0.25);
        assert!(!db.tick(1.0));
        assert!(!db.is_pending());
    }
}
