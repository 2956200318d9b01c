//! One HTTP attempt against an endpoint (libcurl easy API).
//!
//! POSTs the request body with a bearer credential and collects the response
//! body in memory. Status handling and retries live in `retry`; this module
//! only reports what the wire said.

use std::time::Duration;

use url::Url;

use crate::retry::AttemptError;

/// Bodies kept on error are truncated to this many bytes for classification
/// and reporting; artifact bodies are returned whole.
const ERROR_BODY_LIMIT: usize = 4 * 1024;

/// Transport knobs for a single attempt.
#[derive(Debug, Clone, Copy)]
pub struct TransportOptions {
    /// TCP/TLS connect timeout.
    pub connect_timeout: Duration,
    /// Hard wall-clock timeout for the whole attempt. Generation on a warm
    /// endpoint can legitimately take minutes.
    pub request_timeout: Duration,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            connect_timeout: Duration::from_secs(30),
            request_timeout: Duration::from_secs(600),
        }
    }
}

/// Issues one POST and returns the artifact bytes on 2xx, or an
/// [`AttemptError`] carrying the status and a body snippet otherwise.
pub fn post_once(
    url: &Url,
    token: &str,
    content_type: &str,
    payload: &[u8],
    opts: TransportOptions,
) -> Result<Vec<u8>, AttemptError> {
    let mut easy = curl::easy::Easy::new();
    easy.url(url.as_str()).map_err(AttemptError::Curl)?;
    easy.post(true).map_err(AttemptError::Curl)?;
    easy.post_fields_copy(payload).map_err(AttemptError::Curl)?;
    easy.follow_location(true).map_err(AttemptError::Curl)?;
    easy.connect_timeout(opts.connect_timeout)
        .map_err(AttemptError::Curl)?;
    easy.timeout(opts.request_timeout).map_err(AttemptError::Curl)?;

    let mut list = curl::easy::List::new();
    list.append(&format!("Authorization: Bearer {}", token))
        .map_err(AttemptError::Curl)?;
    list.append(&format!("Content-Type: {}", content_type))
        .map_err(AttemptError::Curl)?;
    easy.http_headers(list).map_err(AttemptError::Curl)?;

    let mut body = Vec::new();
    {
        let mut transfer = easy.transfer();
        transfer
            .write_function(|data| {
                body.extend_from_slice(data);
                Ok(data.len())
            })
            .map_err(AttemptError::Curl)?;
        transfer.perform().map_err(AttemptError::Curl)?;
    }

    let code = easy.response_code().map_err(AttemptError::Curl)?;
    if (200..300).contains(&code) {
        return Ok(body);
    }
    let snippet = String::from_utf8_lossy(&body[..body.len().min(ERROR_BODY_LIMIT)])
        .trim()
        .to_string();
    Err(AttemptError::Http {
        code,
        body: snippet,
    })
}
