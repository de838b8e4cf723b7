use std::time::{Duration, Instant};

/// Default lockout added per recorded failure.
pub const DEFAULT_UNIT_PENALTY: Duration = Duration::from_secs(60);

/// Upper bound of a single lockout, about one hundred years.
pub const MAX_PENALTY: Duration = Duration::from_secs(100 * 365 * 24 * 60 * 60);

/// The submission lockout that follows wrong guesses.
///
/// Every failure is recorded with its timestamp and never forgotten. After the
/// `n`-th failure, submissions are blocked for `n × unit_penalty` measured from
/// that failure. Successful guesses do not reset the count.
///
/// The clock is never read internally: every query takes the current instant,
/// so the lock is enforced correctly however rarely it is polled.
///
/// # Examples
///
/// ```
/// use std::time::{Duration, Instant};
///
/// use quartets_game::Lockout;
///
/// let mut lockout = Lockout::new(Duration::from_secs(60));
/// let t0 = Instant::now();
/// assert!(!lockout.is_locked(t0));
///
/// lockout.record_failure(t0);
/// assert!(lockout.is_locked(t0 + Duration::from_secs(59)));
/// assert!(!lockout.is_locked(t0 + Duration::from_secs(60)));
///
/// let t1 = t0 + Duration::from_secs(90);
/// lockout.record_failure(t1);
/// assert_eq!(lockout.allow_after(), Some(t1 + Duration::from_secs(120)));
/// assert_eq!(lockout.remaining_minutes(t1), 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lockout {
    unit_penalty: Duration,
    failures: Vec<Instant>,
    allow_after: Option<Instant>,
}

impl Default for Lockout {
    fn default() -> Self {
        Self::new(DEFAULT_UNIT_PENALTY)
    }
}

impl Lockout {
    /// Creates an unlocked clock with no failures.
    #[must_use]
    pub fn new(unit_penalty: Duration) -> Self {
        Self {
            unit_penalty,
            failures: Vec::new(),
            allow_after: None,
        }
    }

    /// Returns the lockout added per recorded failure.
    #[must_use]
    pub fn unit_penalty(&self) -> Duration {
        self.unit_penalty
    }

    /// Returns the timestamps of all recorded failures, oldest first.
    #[must_use]
    pub fn failures(&self) -> &[Instant] {
        &self.failures
    }

    /// Returns the number of recorded failures.
    #[must_use]
    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    /// Returns the earliest instant a submission is accepted, if any failure
    /// has been recorded.
    #[must_use]
    pub fn allow_after(&self) -> Option<Instant> {
        self.allow_after
    }

    /// Returns the lockout imposed by the `count`-th failure, capped at
    /// [`MAX_PENALTY`].
    #[must_use]
    pub fn penalty_for(&self, count: usize) -> Duration {
        let count = u32::try_from(count).unwrap_or(u32::MAX);
        self.unit_penalty.saturating_mul(count).min(MAX_PENALTY)
    }

    /// Records a failure at `now` and returns the new unlock instant.
    ///
    /// If `now` plus the penalty is not representable, the lock ends at the
    /// latest representable instant found by halving the penalty.
    pub fn record_failure(&mut self, now: Instant) -> Instant {
        self.failures.push(now);
        let mut penalty = self.penalty_for(self.failures.len());
        let allow_after = loop {
            if let Some(allow_after) = now.checked_add(penalty) {
                break allow_after;
            }
            penalty /= 2;
        };
        self.allow_after = Some(allow_after);
        allow_after
    }

    /// Returns `true` while `now` is before the unlock instant.
    #[must_use]
    pub fn is_locked(&self, now: Instant) -> bool {
        self.allow_after.is_some_and(|allow_after| now < allow_after)
    }

    /// Returns the time left until unlock, or zero when unlocked.
    #[must_use]
    pub fn remaining(&self, now: Instant) -> Duration {
        self.allow_after
            .map(|allow_after| allow_after.saturating_duration_since(now))
            .unwrap_or_default()
    }

    /// Returns the time left until unlock in whole minutes, rounded up.
    ///
    /// Zero when unlocked.
    #[must_use]
    pub fn remaining_minutes(&self, now: Instant) -> u64 {
        let remaining = self.remaining(now);
        let secs = remaining
            .as_secs()
            .saturating_add(u64::from(remaining.subsec_nanos() > 0));
        secs.div_ceil(60)
    }
}
