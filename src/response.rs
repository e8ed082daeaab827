//! Response envelope parsing and nested-key unwrapping.

use serde_json::Value;

use crate::Error;

/// The status literal the API reports on success.
const SUCCESS_STATUS: u16 = 200;

/// Decodes `body` and extracts the top-level `response` object.
///
/// The body is decoded before the status is checked, so a non-success
/// reply with an unparsable body reports the parse failure. Non-success
/// statuses carry the method name, the requested URL, and a truncated
/// body snippet for diagnostics.
pub(crate) fn parse_envelope(
    method: &'static str,
    status: u16,
    url: &str,
    body: &str,
) -> Result<Value, Error> {
    let parsed: Value = serde_json::from_str(body).map_err(|e| {
        tracing::error!(
            "Failed to parse {} response: {} | body: {}",
            method,
            e,
            truncate_body(body)
        );
        Error::Parse { method, source: e }
    })?;

    if status != SUCCESS_STATUS {
        let snippet = truncate_body(body);
        tracing::error!("{} failed with status {}: {}", method, status, snippet);
        return Err(Error::Api {
            method,
            status,
            url: url.to_string(),
            body: snippet,
        });
    }

    unwrap_key(method, parsed, "response")
}

/// Removes and returns `value[key]`.
///
/// The remote schema is the source of truth and is not independently
/// validated; a missing key or a non-object value is a shape error.
pub(crate) fn unwrap_key(
    method: &'static str,
    value: Value,
    key: &'static str,
) -> Result<Value, Error> {
    match value {
        Value::Object(mut map) => map.remove(key).ok_or(Error::Shape { method, key }),
        _ => Err(Error::Shape { method, key }),
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 2000;
    if body.len() <= MAX {
        return body.to_string();
    }
    // Back up to a char boundary so multibyte text never splits mid-char.
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
