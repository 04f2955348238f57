//! Scroll speed ramp
//!
//! Time is accumulated from each Playing tick's delta, so the ramp is
//! deterministic for a given sequence of deltas and needs no wall clock.

#[derive(Debug, Clone, PartialEq)]
pub struct DifficultyRamp {
    /// Seconds accumulated toward the next step
    accumulator: f32,
    interval: f32,
    increment: f32,
}

impl DifficultyRamp {
    pub fn new(interval: f32, increment: f32) -> Self {
        Self {
            accumulator: 0.0,
            interval,
            increment,
        }
    }

    /// Advance the clock by `dt` seconds and raise `speed` once per full
    /// interval elapsed. Returns the number of steps applied.
    ///
    /// Negative and non-finite deltas are ignored.
    pub fn apply(&mut self, dt: f32, speed: &mut f32) -> u32 {
        if !(self.interval > 0.0) || !dt.is_finite() || dt <= 0.0 {
            return 0;
        }
        self.accumulator += dt;
        if self.accumulator < self.interval {
            return 0;
        }

        let steps = (self.accumulator / self.interval).floor();
        self.accumulator %= self.interval;
        *speed += self.increment * steps;
        steps as u32
    }

    pub fn reset(&mut self) {
        self.accumulator = 0.0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_every_interval() {
        let mut ramp = DifficultyRamp::new(10.0, 0.5);
        let mut speed = 5.0;

        // 9.5 seconds: no step yet
        for _ in 0..95 {
            assert_eq!(ramp.apply(0.1, &mut speed), 0);
        }
        assert_eq!(speed, 5.0);

        // Crossing 10 seconds
        let mut steps = 0;
        for _ in 0..6 {
            steps += ramp.apply(0.1, &mut speed);
        }
        assert_eq!(steps, 1);
        assert_eq!(speed, 5.5);
    }

    #[test]
    fn test_long_frame_applies_multiple_steps() {
        let mut ramp = DifficultyRamp::new(10.0, 0.5);
        let mut speed = 5.0;
        assert_eq!(ramp.apply(25.0, &mut speed), 2);
        assert_eq!(speed, 6.0);

        // 5 s left over toward the next step
        assert_eq!(ramp.apply(4.9, &mut speed), 0);
        assert_eq!(ramp.apply(0.2, &mut speed), 1);
        assert_eq!(speed, 6.5);
    }

    #[test]
    fn test_negative_and_nan_deltas_ignored() {
        let mut ramp = DifficultyRamp::new(10.0, 0.5);
        let mut speed = 5.0;
        ramp.apply(-100.0, &mut speed);
        ramp.apply(f32::NAN, &mut speed);
        assert_eq!(speed, 5.0);
        assert_eq!(ramp.apply(9.9, &mut speed), 0);
    }

    #[test]
    fn test_infinite_and_huge_deltas_return() {
        let mut ramp = DifficultyRamp::new(10.0, 0.5);
        let mut speed = 5.0;
        assert_eq!(ramp.apply(f32::INFINITY, &mut speed), 0);
        assert_eq!(ramp.apply(f32::NEG_INFINITY, &mut speed), 0);
        assert_eq!(speed, 5.0);

        // One call covering 1e9 seconds: every step applied at once
        let steps = ramp.apply(1e9, &mut speed);
        assert_eq!(steps, 100_000_000);
        assert!(speed.is_finite() && speed > 5.0);
        assert_eq!(ramp.apply(0.0, &mut speed), 0);
    }

    #[test]
    fn test_reset_clears_clock() {
        let mut ramp = DifficultyRamp::new(10.0, 0.5);
        let mut speed = 5.0;
        ramp.apply(9.0, &mut speed);
        ramp.reset();
        ramp.apply(9.0, &mut speed);
        assert_eq!(speed, 5.0);
    }
}
