//! Named inference endpoints and URL resolution.

use url::Url;

use crate::error::CallError;

/// A named remote model endpoint (e.g. `stabilityai/stable-diffusion-xl-base-1.0`).
/// Immutable per call; selected by the caller before invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Endpoint {
    id: String,
}

impl Endpoint {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    /// Stable identifier, as used in the request path.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Resolve the full request URL against the configured base address.
    /// A malformed base or identifier is a `NetworkFault`; no attempt is made.
    pub fn resolve(&self, api_base: &str) -> Result<Url, CallError> {
        let address = format!("{}/{}", api_base.trim_end_matches('/'), self.id);
        Url::parse(&address).map_err(|e| CallError::NetworkFault {
            detail: format!("invalid endpoint address '{}': {}", address, e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_against_base() {
        let url = Endpoint::new("acme/model-x")
            .resolve("https://api.example.com/models")
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/models/acme/model-x");
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let url = Endpoint::new("acme/model-x")
            .resolve("https://api.example.com/models/")
            .unwrap();
        assert_eq!(url.as_str(), "https://api.example.com/models/acme/model-x");
    }

    #[test]
    fn malformed_base_is_a_network_fault() {
        let err = Endpoint::new("acme/model-x")
            .resolve("not a url")
            .unwrap_err();
        assert!(matches!(err, CallError::NetworkFault { .. }));
    }
}
