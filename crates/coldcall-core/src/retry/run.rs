//! Attempt loop: run a call until success or the retry policy says stop.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::time::Duration;

use super::classify;
use super::error::AttemptError;
use super::policy::{ErrorKind, RetryDecision, RetryPolicy};
use crate::error::CallError;
use crate::progress::{AttemptNotice, NoticeKind};

/// Granularity at which inter-attempt sleeps poll the abort token.
const ABORT_POLL: Duration = Duration::from_millis(100);

/// Runs one resilient call: invokes `attempt_fn` until it succeeds, the
/// policy refuses to retry, or the abort token trips.
///
/// `attempt_fn` performs one HTTP round trip (1-based ordinal passed in) and
/// returns the artifact bytes or an [`AttemptError`]. Each retryable failure
/// emits an [`AttemptNotice`] on `notices` (when present) before the backoff
/// sleep. The number of invocations never exceeds `policy.max_attempts`.
pub fn run_with_retry<F>(
    policy: &RetryPolicy,
    endpoint_id: &str,
    notices: Option<&mpsc::Sender<AttemptNotice>>,
    abort: Option<&AtomicBool>,
    mut attempt_fn: F,
) -> Result<Vec<u8>, CallError>
where
    F: FnMut(u32) -> Result<Vec<u8>, AttemptError>,
{
    let mut attempt = 1u32;
    loop {
        if is_aborted(abort) {
            return Err(CallError::Aborted);
        }
        match attempt_fn(attempt) {
            Ok(bytes) => return Ok(bytes),
            Err(e) => {
                let kind = classify::classify(&e);
                match policy.decide(attempt, kind) {
                    RetryDecision::NoRetry => {
                        return Err(terminal(endpoint_id, attempt, kind, &e));
                    }
                    RetryDecision::RetryAfter(wait) => {
                        tracing::info!(
                            endpoint = endpoint_id,
                            attempt,
                            max_attempts = policy.max_attempts,
                            wait_secs = wait.as_secs_f64(),
                            "attempt failed ({}), retrying",
                            e
                        );
                        if let Some(tx) = notices {
                            let _ = tx.send(AttemptNotice {
                                attempt,
                                max_attempts: policy.max_attempts,
                                wait,
                                kind: NoticeKind::from(kind),
                            });
                        }
                        if !sleep_unless_aborted(wait, abort) {
                            return Err(CallError::Aborted);
                        }
                        attempt += 1;
                    }
                }
            }
        }
    }
}

/// Map a refused retry to the terminal failure the caller sees.
fn terminal(endpoint_id: &str, attempt: u32, kind: ErrorKind, e: &AttemptError) -> CallError {
    match kind {
        ErrorKind::Gone => CallError::EndpointGone {
            endpoint: endpoint_id.to_string(),
        },
        _ => CallError::ExhaustedRetries {
            attempts: attempt,
            last: e.to_string(),
        },
    }
}

fn is_aborted(abort: Option<&AtomicBool>) -> bool {
    abort.is_some_and(|a| a.load(Ordering::Relaxed))
}

/// Sleeps for `wait`, polling the abort token. Returns false when aborted.
fn sleep_unless_aborted(wait: Duration, abort: Option<&AtomicBool>) -> bool {
    if abort.is_none() {
        std::thread::sleep(wait);
        return true;
    }
    let mut remaining = wait;
    while remaining > Duration::ZERO {
        if is_aborted(abort) {
            return false;
        }
        let step = remaining.min(ABORT_POLL);
        std::thread::sleep(step);
        remaining = remaining.saturating_sub(step);
    }
    !is_aborted(abort)
}
