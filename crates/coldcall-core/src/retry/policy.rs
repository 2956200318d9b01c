use std::time::Duration;

/// High-level classification of an attempt failure for retry purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The backing model is still loading (cold start). Carries the
    /// service-suggested wait when the response included one.
    WarmingUp { estimated: Option<Duration> },
    /// The endpoint no longer exists (moved or removed). Never retried.
    Gone,
    /// Transport-level failure (timeout, DNS, connection reset).
    Network,
    /// Any other failure (unexpected status, malformed response).
    Transient,
}

/// Decision returned by the retry policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RetryDecision {
    /// Do not retry this error.
    NoRetry,
    /// Retry after the given delay.
    RetryAfter(Duration),
}

/// Waits between attempts, bounded by a fixed attempt budget.
///
/// Warming-up gets the long wait so cold starts do not burn the budget;
/// every other retryable failure gets the short one. All durations come from
/// the `[retry]` config section when present.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Maximum number of attempts (including the first).
    pub max_attempts: u32,
    /// Wait before retrying a warming-up endpoint when the service did not
    /// suggest a duration.
    pub warmup_wait: Duration,
    /// Upper bound on the warming-up wait; caps service-suggested values too.
    pub warmup_wait_cap: Duration,
    /// Wait before retrying any other transient failure.
    pub transient_wait: Duration,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_attempts: 3,
            warmup_wait: Duration::from_secs(20),
            warmup_wait_cap: Duration::from_secs(60),
            transient_wait: Duration::from_secs(5),
        }
    }
}

impl RetryPolicy {
    /// Decide what to do after a failed attempt.
    ///
    /// `attempt` is 1-based (1 = first attempt). Gone endpoints are never
    /// retried regardless of remaining budget; nothing is retried once the
    /// budget is spent.
    pub fn decide(&self, attempt: u32, kind: ErrorKind) -> RetryDecision {
        match kind {
            ErrorKind::Gone => RetryDecision::NoRetry,
            _ if attempt >= self.max_attempts => RetryDecision::NoRetry,
            ErrorKind::WarmingUp { estimated } => {
                let wait = estimated.unwrap_or(self.warmup_wait).min(self.warmup_wait_cap);
                RetryDecision::RetryAfter(wait)
            }
            ErrorKind::Network | ErrorKind::Transient => {
                RetryDecision::RetryAfter(self.transient_wait)
            }
        }
    }
}
