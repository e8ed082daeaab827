//! Request URL construction for the OpenSecrets API.

use url::Url;

use crate::Error;

/// Output format requested from the API. The service defaults to XML.
const OUTPUT_FORMAT: &str = "json";

/// Ordered query parameters for a single API call.
///
/// Pairs are emitted in insertion order, with no deduplication or
/// reordering. Optional values are included only when non-empty; the
/// remote service treats a blank filter differently from an absent one,
/// so blank values are dropped entirely.
#[derive(Debug, Clone, Default)]
pub(crate) struct Params {
    pairs: Vec<(&'static str, String)>,
}

impl Params {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Appends a required parameter.
    pub(crate) fn push(mut self, key: &'static str, value: &str) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    /// Appends an optional parameter, skipping `None` and empty values.
    pub(crate) fn push_opt(mut self, key: &'static str, value: Option<&str>) -> Self {
        if let Some(value) = value {
            if !value.is_empty() {
                self.pairs.push((key, value.to_string()));
            }
        }
        self
    }
}

/// Builds the request URL for `method`.
///
/// The query string always carries `method`, the output flag, and
/// `apikey` first, followed by the caller-supplied pairs in the order
/// they were pushed. All pairs are percent-encoded. Method names are not
/// validated locally; an unknown method is rejected by the remote
/// service.
pub(crate) fn build_url(
    base_url: &str,
    method: &str,
    api_key: &str,
    params: &Params,
) -> Result<Url, Error> {
    let mut url = Url::parse(base_url)?;
    {
        let mut pairs = url.query_pairs_mut();
        pairs
            .append_pair("method", method)
            .append_pair("output", OUTPUT_FORMAT)
            .append_pair("apikey", api_key);
        for (key, value) in &params.pairs {
            pairs.append_pair(key, value);
        }
    }
    Ok(url)
}
