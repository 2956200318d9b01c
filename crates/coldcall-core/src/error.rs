//! Terminal failure taxonomy for resilient calls.

/// Terminal outcome of a call. Everything that is not artifact bytes resolves
/// to exactly one of these; retryable failures never cross this boundary.
#[derive(Debug, thiserror::Error)]
pub enum CallError {
    /// The endpoint no longer exists (404/410). Retrying cannot help, so the
    /// remaining attempt budget is not consumed.
    #[error("endpoint '{endpoint}' is gone (moved or removed)")]
    EndpointGone { endpoint: String },

    /// The attempt budget was spent without a success. `last` carries the
    /// final attempt's failure detail (status + body snippet, or the curl
    /// error text) for debugging.
    #[error("service unavailable after {attempts} attempt(s); last error: {last}")]
    ExhaustedRetries { attempts: u32, last: String },

    /// The call could not be attempted at all: the endpoint did not resolve
    /// to a well-formed address, or the request body could not be encoded.
    #[error("request could not be issued: {detail}")]
    NetworkFault { detail: String },

    /// The caller's abort token tripped between attempts or mid-sleep.
    #[error("call aborted by caller")]
    Aborted,
}
