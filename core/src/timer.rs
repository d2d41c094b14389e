/// Slack for float drift when a countdown is advanced in fixed steps.
/// 1/60 s summed thirty times lands a hair above or below 0.5.
pub const TIMER_EPSILON: f32 = 1e-4;

/// Elapsed-time countdown advanced by the simulation tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Countdown {
    seconds_left: f32,
}

impl Countdown {
    pub fn new(seconds: f32) -> Self {
        Self {
            seconds_left: seconds.max(0.0),
        }
    }

    /// Start a new countdown that absorbs the overshoot of the previous one.
    pub fn chained(seconds: f32, previous: &Countdown) -> Self {
        Self {
            seconds_left: seconds + previous.seconds_left.min(0.0),
        }
    }

    pub fn seconds_left(&self) -> f32 {
        self.seconds_left.max(0.0)
    }

    pub fn is_finished(&self) -> bool {
        self.seconds_left <= TIMER_EPSILON
    }

    /// Advance by `dt`; returns true once the countdown has run out.
    pub fn advance(&mut self, dt: f32) -> bool {
        self.seconds_left -= dt;
        self.is_finished()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finishes_after_exact_number_of_fixed_steps() {
        let dt = 1.0 / 60.0;
        let mut countdown = Countdown::new(0.5);
        for _ in 0..29 {
            assert!(!countdown.advance(dt));
        }
        assert!(countdown.advance(dt));
    }

    #[test]
    fn zero_countdown_is_finished_immediately() {
        assert!(Countdown::new(0.0).is_finished());
        assert!(Countdown::new(-1.0).is_finished());
    }

    #[test]
    fn chained_countdown_absorbs_overshoot() {
        let mut first = Countdown::new(0.5);
        assert!(first.advance(0.7));
        let second = Countdown::chained(1.0, &first);
        assert!((second.seconds_left() - 0.8).abs() < 1e-6);
    }

    #[test]
    fn seconds_left_never_negative() {
        let mut countdown = Countdown::new(0.1);
        countdown.advance(1.0);
        assert_eq!(countdown.seconds_left(), 0.0);
    }
}
