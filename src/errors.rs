//! Error types for the API client.

/// Errors that can occur when making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The HTTP request itself failed (connection, timeout, body read).
    #[error("Network error")]
    Network(#[from] reqwest::Error),

    /// The configured base URL could not be parsed.
    #[error("Invalid base URL")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The response body was not valid JSON.
    #[error("Failed to parse {method} response")]
    Parse {
        method: &'static str,
        #[source]
        source: serde_json::Error,
    },

    /// The API answered with a non-success status.
    #[error("{method} failed with status {status}")]
    Api {
        method: &'static str,
        status: u16,
        url: String,
        body: String,
    },

    /// The response did not have the expected shape.
    #[error("Missing key `{key}` in {method} response")]
    Shape {
        method: &'static str,
        key: &'static str,
    },
}
