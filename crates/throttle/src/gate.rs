use std::time::{Duration, Instant};

/// Default minimum interval between admitted sends.
pub const DEFAULT_MIN_SEND_INTERVAL: Duration = Duration::from_secs(10);

/// Stateful gate that suppresses sends arriving faster than a minimum
/// interval.
///
/// The gate is private to one reporting session and assumes a
/// single-threaded caller; it is not reentrant.
///
/// # Pacing rules
///
/// - A forced call always passes and stamps the gate.
/// - The first unforced call has no reference point and is treated as
///   zero elapsed time: it starts the clock but is suppressed whenever the
///   interval is non-zero. Session initialization does not start the
///   clock implicitly.
/// - Subsequent unforced calls pass once the interval has elapsed since
///   the last admitted (or clock-starting) call; passing stamps the gate,
///   a suppressed call does not.
#[derive(Clone, Copy, Debug)]
pub struct SendGate {
    min_interval: Duration,
    last_send: Option<Instant>,
}

impl SendGate {
    /// Creates a gate with the supplied minimum interval.
    #[must_use]
    pub const fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_send: None,
        }
    }

    /// Returns the configured minimum interval.
    #[must_use]
    pub const fn min_interval(&self) -> Duration {
        self.min_interval
    }

    /// Decides whether a send observed at `now` may proceed.
    ///
    /// Returns `true` when the send is admitted; the gate is stamped as a
    /// side effect. A suppressed send leaves the stamp untouched so the
    /// wait is measured from the last admitted send, not the last attempt.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::time::{Duration, Instant};
    /// use throttle::SendGate;
    ///
    /// let mut gate = SendGate::new(Duration::from_secs(10));
    /// let start = Instant::now();
    ///
    /// // The first natural update is suppressed; a forced one passes.
    /// assert!(!gate.should_send(start, false));
    /// assert!(gate.should_send(start, true));
    /// ```
    pub fn should_send(&mut self, now: Instant, force: bool) -> bool {
        if force {
            self.last_send = Some(now);
            return true;
        }

        match self.last_send {
            None => {
                // No reference point yet: start the clock at this
                // observation and treat the elapsed time as zero.
                self.last_send = Some(now);
                self.min_interval.is_zero()
            }
            Some(previous) => {
                if now.saturating_duration_since(previous) >= self.min_interval {
                    self.last_send = Some(now);
                    true
                } else {
                    false
                }
            }
        }
    }
}

impl Default for SendGate {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_SEND_INTERVAL)
    }
}
