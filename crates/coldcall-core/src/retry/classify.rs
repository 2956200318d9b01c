//! Classify HTTP statuses and curl errors into retry policy error kinds.

use crate::retry::error::AttemptError;
use crate::retry::policy::ErrorKind;
use std::time::Duration;

/// Body markers consulted when the status code alone is ambiguous. Matching
/// on error text is fragile (the backend does not guarantee stable wording);
/// status codes are the primary signal and these are a fallback only.
const LOADING_MARKER: &str = "loading";
const GONE_MARKERS: [&str; 2] = ["not found", "moved"];

/// Classify a non-2xx HTTP response for retry decisions.
///
/// 503 means the backing model is still warming up; its JSON body may carry
/// an `estimated_time` hint in seconds. 404/410 mean the endpoint is gone.
pub fn classify_http(code: u32, body: &str) -> ErrorKind {
    match code {
        503 => ErrorKind::WarmingUp {
            estimated: estimated_time(body),
        },
        404 | 410 => ErrorKind::Gone,
        _ => {
            let lower = body.to_lowercase();
            if lower.contains(LOADING_MARKER) {
                return ErrorKind::WarmingUp {
                    estimated: estimated_time(body),
                };
            }
            if GONE_MARKERS.iter().any(|m| lower.contains(m)) {
                return ErrorKind::Gone;
            }
            ErrorKind::Transient
        }
    }
}

/// Classify a curl error for retry decisions.
pub fn classify_curl_error(e: &curl::Error) -> ErrorKind {
    if e.is_operation_timedout()
        || e.is_couldnt_connect()
        || e.is_couldnt_resolve_host()
        || e.is_couldnt_resolve_proxy()
        || e.is_recv_error()
        || e.is_send_error()
        || e.is_got_nothing()
    {
        return ErrorKind::Network;
    }
    ErrorKind::Transient
}

/// Classify an attempt error (curl or HTTP) into an ErrorKind.
pub fn classify(e: &AttemptError) -> ErrorKind {
    match e {
        AttemptError::Curl(ce) => classify_curl_error(ce),
        AttemptError::Http { code, body } => classify_http(*code, body),
    }
}

/// Service-suggested wait from a warming-up response body
/// (`{"error": "...", "estimated_time": 42.5}`).
fn estimated_time(body: &str) -> Option<Duration> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    let secs = value.get("estimated_time")?.as_f64()?;
    if secs.is_finite() && secs > 0.0 {
        Some(Duration::from_secs_f64(secs))
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_503_is_warming_up() {
        assert_eq!(
            classify_http(503, ""),
            ErrorKind::WarmingUp { estimated: None }
        );
    }

    #[test]
    fn http_503_estimated_time_is_parsed() {
        let body = r#"{"error":"Model is currently loading","estimated_time":5.0}"#;
        assert_eq!(
            classify_http(503, body),
            ErrorKind::WarmingUp {
                estimated: Some(Duration::from_secs(5))
            }
        );
    }

    #[test]
    fn http_503_bad_estimate_is_ignored() {
        assert_eq!(
            classify_http(503, r#"{"estimated_time":-3}"#),
            ErrorKind::WarmingUp { estimated: None }
        );
        assert_eq!(
            classify_http(503, "model is loading"),
            ErrorKind::WarmingUp { estimated: None }
        );
    }

    #[test]
    fn http_404_and_410_are_gone() {
        assert_eq!(classify_http(404, ""), ErrorKind::Gone);
        assert_eq!(classify_http(410, ""), ErrorKind::Gone);
    }

    #[test]
    fn loading_marker_falls_back_to_warming_up() {
        assert_eq!(
            classify_http(400, "Model xyz is Loading, please wait"),
            ErrorKind::WarmingUp { estimated: None }
        );
    }

    #[test]
    fn gone_markers_fall_back_to_gone() {
        assert_eq!(classify_http(400, "model not found"), ErrorKind::Gone);
        assert_eq!(classify_http(400, "resource Moved permanently"), ErrorKind::Gone);
    }

    #[test]
    fn other_statuses_are_transient() {
        assert_eq!(classify_http(500, ""), ErrorKind::Transient);
        assert_eq!(classify_http(502, "bad gateway"), ErrorKind::Transient);
        assert_eq!(classify_http(429, ""), ErrorKind::Transient);
    }

    #[test]
    fn curl_timeout_is_network() {
        // 28 = CURLE_OPERATION_TIMEDOUT
        let e = curl::Error::new(28);
        assert_eq!(classify_curl_error(&e), ErrorKind::Network);
    }

    #[test]
    fn curl_connect_failure_is_network() {
        // 7 = CURLE_COULDNT_CONNECT
        let e = curl::Error::new(7);
        assert_eq!(classify_curl_error(&e), ErrorKind::Network);
    }
}
