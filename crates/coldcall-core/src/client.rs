//! Client facade: wires the transport into the retry loop.

use std::sync::atomic::AtomicBool;
use std::sync::mpsc;

use crate::config::ColdcallConfig;
use crate::endpoint::Endpoint;
use crate::error::CallError;
use crate::progress::AttemptNotice;
use crate::request::Request;
use crate::retry::{run_with_retry, RetryPolicy};
use crate::transport::{self, TransportOptions};

/// Resilient client for hosted inference endpoints.
///
/// Credential and base address are explicit immutable values captured at
/// construction; call logic never consults the process environment. No state
/// is kept between calls.
#[derive(Debug, Clone)]
pub struct Client {
    /// Base address endpoint identifiers are resolved against.
    pub api_base: String,
    /// Bearer credential sent with every outbound request.
    pub token: String,
    pub policy: RetryPolicy,
    pub transport: TransportOptions,
}

impl Client {
    pub fn new(api_base: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            api_base: api_base.into(),
            token: token.into(),
            policy: RetryPolicy::default(),
            transport: TransportOptions::default(),
        }
    }

    /// Build a client from loaded configuration plus the credential.
    pub fn from_config(cfg: &ColdcallConfig, token: impl Into<String>) -> Self {
        let mut client = Self::new(cfg.api_base.clone(), token);
        if let Some(retry) = &cfg.retry {
            client.policy = RetryPolicy::from(retry);
        }
        client
    }

    /// Performs one resilient call: artifact bytes on success, a terminal
    /// failure otherwise. Blocks for the attempts and any backoff sleeps.
    pub fn call(&self, endpoint: &Endpoint, request: &Request) -> Result<Vec<u8>, CallError> {
        self.call_with(endpoint, request, None, None)
    }

    /// Like [`Client::call`], with a progress-notice channel and an abort
    /// token. A notice is sent before each backoff sleep; a tripped token
    /// ends the call with [`CallError::Aborted`] between attempts or
    /// mid-sleep.
    pub fn call_with(
        &self,
        endpoint: &Endpoint,
        request: &Request,
        notices: Option<&mpsc::Sender<AttemptNotice>>,
        abort: Option<&AtomicBool>,
    ) -> Result<Vec<u8>, CallError> {
        let url = endpoint.resolve(&self.api_base)?;
        let payload = request.body()?;
        let content_type = request.content_type();
        tracing::debug!(
            endpoint = endpoint.id(),
            url = %url,
            bytes = payload.len(),
            content_type,
            "issuing call"
        );
        run_with_retry(&self.policy, endpoint.id(), notices, abort, |attempt| {
            tracing::debug!(endpoint = endpoint.id(), attempt, "attempt");
            transport::post_once(&url, &self.token, content_type, &payload, self.transport)
        })
    }
}
