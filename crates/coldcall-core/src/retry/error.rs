//! Attempt error type for retry classification.

use std::fmt;

/// Error from a single HTTP attempt (curl failure or non-2xx response).
/// Kept structured so callers can classify and decide retries before
/// anything is flattened into a terminal failure.
#[derive(Debug)]
pub enum AttemptError {
    /// Curl reported an error (timeout, connection, TLS, etc.).
    Curl(curl::Error),
    /// HTTP response had a non-2xx status. `body` is a lossily decoded,
    /// truncated snippet of the response body; warming-up responses carry an
    /// `estimated_time` hint there.
    Http { code: u32, body: String },
}

impl fmt::Display for AttemptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttemptError::Curl(e) => write!(f, "{}", e),
            AttemptError::Http { code, body } if body.is_empty() => {
                write!(f, "HTTP {}", code)
            }
            AttemptError::Http { code, body } => write!(f, "HTTP {}: {}", code, body),
        }
    }
}

impl std::error::Error for AttemptError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AttemptError::Curl(e) => Some(e),
            AttemptError::Http { .. } => None,
        }
    }
}
