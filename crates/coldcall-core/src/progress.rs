//! Progress notices for in-flight calls.
//!
//! The engine reports each retryable attempt (ordinal, planned wait) through
//! an optional channel; consumers such as the CLI print them as user
//! feedback. A missing or dropped receiver disables the channel silently.

use std::fmt;
use std::time::Duration;

use crate::retry::ErrorKind;

/// Why the engine is waiting before the next attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    /// The backing model is still loading (cold start).
    Warming,
    /// Some other transient failure.
    Transient,
}

impl From<ErrorKind> for NoticeKind {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::WarmingUp { .. } => NoticeKind::Warming,
            _ => NoticeKind::Transient,
        }
    }
}

/// One retryable attempt, reported just before the backoff sleep.
#[derive(Debug, Clone, Copy)]
pub struct AttemptNotice {
    /// 1-based attempt ordinal.
    pub attempt: u32,
    /// Attempt budget, including the first attempt.
    pub max_attempts: u32,
    /// Planned wait before the next attempt.
    pub wait: Duration,
    pub kind: NoticeKind,
}

impl fmt::Display for AttemptNotice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self.kind {
            NoticeKind::Warming => "model warming up",
            NoticeKind::Transient => "transient error",
        };
        write!(
            f,
            "{} (attempt {}/{}), retrying in {:.0}s",
            what,
            self.attempt,
            self.max_attempts,
            self.wait.as_secs_f64()
        )
    }
}
