use std::time::Duration;

/// Countdown for a session, extended by a bonus on every match.
///
/// The timer only moves when the owner calls [`GameTimer::advance`]; it never
/// reads a clock itself.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
///
/// use tilelink_game::GameTimer;
///
/// let mut timer = GameTimer::new(Duration::from_secs(10), Duration::from_secs(1));
/// timer.advance(Duration::from_secs(4));
/// timer.add_bonus();
/// assert_eq!(timer.remaining(), Duration::from_secs(7));
/// assert!((timer.fraction() - 0.7).abs() < 1e-6);
///
/// assert!(timer.advance(Duration::from_secs(30)));
/// assert!(timer.is_expired());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameTimer {
    limit: Duration,
    bonus: Duration,
    remaining: Duration,
}

impl GameTimer {
    /// Creates a full timer.
    #[must_use]
    pub const fn new(limit: Duration, bonus: Duration) -> Self {
        Self {
            limit,
            bonus,
            remaining: limit,
        }
    }

    /// Returns the full time of a session.
    #[must_use]
    pub const fn limit(&self) -> Duration {
        self.limit
    }

    /// Returns the time left.
    #[must_use]
    pub const fn remaining(&self) -> Duration {
        self.remaining
    }

    /// Returns the time left as a fraction of the limit, clamped to `0.0..=1.0`.
    #[must_use]
    pub fn fraction(&self) -> f32 {
        if self.limit.is_zero() {
            return 0.0;
        }
        (self.remaining.as_secs_f32() / self.limit.as_secs_f32()).clamp(0.0, 1.0)
    }

    /// Returns `true` once no time is left.
    #[must_use]
    pub const fn is_expired(&self) -> bool {
        self.remaining.is_zero()
    }

    /// Counts `elapsed` down. Returns `true` if this call used up the time.
    pub fn advance(&mut self, elapsed: Duration) -> bool {
        let was_expired = self.is_expired();
        self.remaining = self.remaining.saturating_sub(elapsed);
        !was_expired && self.is_expired()
    }

    /// Adds the match bonus. The remaining time may exceed the limit.
    pub fn add_bonus(&mut self) {
        if !self.is_expired() {
            self.remaining += self.bonus;
        }
    }

    /// Refills the timer.
    pub fn reset(&mut self) {
        self.remaining = self.limit;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SEC: Duration = Duration::from_secs(1);

    #[test]
    fn test_advance_reports_expiry_once() {
        let mut timer = GameTimer::new(3 * SEC, SEC);
        assert!(!timer.advance(2 * SEC));
        assert!(timer.advance(2 * SEC));
        assert!(!timer.advance(SEC));
        assert_eq!(timer.remaining(), Duration::ZERO);
        assert!(timer.fraction().abs() < f32::EPSILON);
    }

    #[test]
    fn test_bonus_may_exceed_limit() {
        let mut timer = GameTimer::new(2 * SEC, SEC);
        timer.add_bonus();
        assert_eq!(timer.remaining(), 3 * SEC);
        assert!((timer.fraction() - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_no_bonus_after_expiry() {
        let mut timer = GameTimer::new(SEC, SEC);
        timer.advance(SEC);
        timer.add_bonus();
        assert!(timer.is_expired());

        timer.reset();
        assert_eq!(timer.remaining(), SEC);
    }
}
