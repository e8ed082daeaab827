//! Top-level client for the OpenSecrets.org API.

use std::sync::Arc;

use serde_json::Value;

use crate::{
    candidates::Candidates,
    committees::Committees,
    independent_expenditures::IndependentExpenditures,
    organizations::Organizations,
    request::{self, Params},
    response,
    transport::Transport,
    Error,
};

/// Production base URL for the OpenSecrets.org API.
pub const BASE_URL: &str = "https://www.opensecrets.org/api/";

/// Environment variable consulted by [`Client::from_env`].
pub const API_KEY_VAR: &str = "OPENSECRETS_API_KEY";

/// Shared collaborators held by every namespace: the base URL, the API
/// key, and the transport. Immutable after construction.
pub(crate) struct Core {
    base_url: String,
    api_key: String,
    transport: Transport,
}

impl Core {
    /// Runs one API call end to end: build the URL, fetch, parse the
    /// envelope, then unwrap each key in `path` in order.
    pub(crate) async fn call(
        &self,
        method: &'static str,
        params: Params,
        path: &[&'static str],
    ) -> Result<Value, Error> {
        let url = request::build_url(&self.base_url, method, &self.api_key, &params)?;
        let (status, body) = self.transport.get(&url).await?;
        let mut value = response::parse_envelope(method, status, url.as_str(), &body)?;
        for key in path {
            value = response::unwrap_key(method, value, key)?;
        }
        Ok(value)
    }
}

/// Client for the OpenSecrets.org campaign-finance API.
///
/// Methods are namespaced by topic through the public fields. Responses
/// are returned as decoded JSON with the envelope and endpoint-specific
/// wrapper keys stripped.
///
/// An API key is required. The key is not validated at construction; an
/// absent or invalid key is rejected by the remote service at the first
/// request.
pub struct Client {
    /// Current Congressional legislators and their finances.
    pub candidates: Candidates,
    /// Fundraising by Congressional committee.
    pub committees: Committees,
    /// Fundraising organizations.
    pub orgs: Organizations,
    /// Independent expenditure transactions.
    pub indexp: IndependentExpenditures,
}

impl Client {
    /// Creates a client for the production API with the given key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::build(BASE_URL.to_string(), api_key.into(), Transport::new())
    }

    /// Creates a client reading the API key from the `OPENSECRETS_API_KEY`
    /// environment variable.
    ///
    /// The variable is read once, here. If it is unset the key is empty
    /// and requests fail remotely at first use rather than at
    /// construction.
    pub fn from_env() -> Self {
        let api_key = std::env::var(API_KEY_VAR).unwrap_or_default();
        Self::build(BASE_URL.to_string(), api_key, Transport::new())
    }

    /// Creates a client with a custom base URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str, api_key: impl Into<String>) -> Self {
        Self::build(base_url.to_string(), api_key.into(), Transport::new())
    }

    /// Creates a client with a custom base URL and a caller-configured
    /// transport. This is how callers opt into response caching.
    pub fn with_transport(
        base_url: &str,
        api_key: impl Into<String>,
        transport: Transport,
    ) -> Self {
        Self::build(base_url.to_string(), api_key.into(), transport)
    }

    fn build(base_url: String, api_key: String, transport: Transport) -> Self {
        let core = Arc::new(Core {
            base_url,
            api_key,
            transport,
        });
        Self {
            candidates: Candidates::new(Arc::clone(&core)),
            committees: Committees::new(Arc::clone(&core)),
            orgs: Organizations::new(Arc::clone(&core)),
            indexp: IndependentExpenditures::new(core),
        }
    }
}
