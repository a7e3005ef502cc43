//! Upstream error types.

use thiserror::Error;

/// Errors raised while building or executing an upstream request.
///
/// Both construction failures and transport failures are absorbed at the
/// dispatch boundary and surfaced to the caller as error-flagged envelopes.
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// The base address and path did not combine into a valid URL.
    #[error("invalid URL: {0}")]
    Url(#[from] url::ParseError),

    /// A caller-supplied header was not valid HTTP.
    #[error("invalid header: {0}")]
    Header(String),

    /// The HTTP call itself failed (connect, DNS, timeout, body read).
    #[error("{0}")]
    Http(String),
}

impl From<reqwest::Error> for UpstreamError {
    fn from(err: reqwest::Error) -> Self {
        Self::Http(err.to_string())
    }
}
