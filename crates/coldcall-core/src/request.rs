//! Generation requests: structured (JSON) or raw binary payloads.

use serde_json::json;

use crate::error::CallError;

/// The unit of work submitted to an endpoint. The variant decides the wire
/// encoding: structured payloads are JSON-wrapped, binary payloads go out
/// as-is. Owned by the call in progress; never retained after it completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Request {
    /// Structured mode: serialized as `{"inputs": <text>}`.
    Inputs(String),
    /// Binary mode: an opaque blob (e.g. an input image) sent unwrapped.
    Raw(Vec<u8>),
}

impl Request {
    /// Wire body for this request.
    pub fn body(&self) -> Result<Vec<u8>, CallError> {
        match self {
            Request::Inputs(text) => serde_json::to_vec(&json!({ "inputs": text })).map_err(|e| {
                CallError::NetworkFault {
                    detail: format!("could not encode request body: {}", e),
                }
            }),
            Request::Raw(bytes) => Ok(bytes.clone()),
        }
    }

    /// `Content-Type` header value matching the wire body.
    pub fn content_type(&self) -> &'static str {
        match self {
            Request::Inputs(_) => "application/json",
            Request::Raw(_) => "application/octet-stream",
        }
    }
}
