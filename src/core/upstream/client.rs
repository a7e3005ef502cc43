//! HTTP client for the upstream service.

use reqwest::header::{HeaderMap, HeaderName, HeaderValue};
use tracing::debug;

use crate::core::config::UpstreamConfig;

use super::error::UpstreamError;
use super::request::OutboundRequest;
use super::response::{ResponseContent, read_response};
use super::url::build_url;

/// Client for the fixed upstream service.
///
/// Cheap to share: the inner `reqwest::Client` is reference-counted, and the
/// base address never changes after startup.
#[derive(Debug, Clone)]
pub struct UpstreamClient {
    http: reqwest::Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(config: &UpstreamConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.clone(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Execute one outbound request and decode the response.
    ///
    /// Exactly one HTTP attempt per call; no retries.
    pub async fn send(&self, request: OutboundRequest) -> Result<ResponseContent, UpstreamError> {
        let url = build_url(&self.base_url, &request.path, request.query.as_ref())?;
        debug!(method = %request.method, url = %url, "sending upstream request");

        let mut builder = self.http.request(request.method.as_reqwest(), url);
        if !request.headers.is_empty() {
            builder = builder.headers(header_map(&request.headers)?);
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await?;
        read_response(response).await
    }
}

/// Collect an ordered header list into a `HeaderMap`. Insertion replaces, so
/// the last occurrence of a name wins and lookups are case-insensitive.
fn header_map(headers: &[(String, String)]) -> Result<HeaderMap, UpstreamError> {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        let name: HeaderName = name
            .parse()
            .map_err(|_| UpstreamError::Header(name.clone()))?;
        let value = HeaderValue::from_str(value)
            .map_err(|_| UpstreamError::Header(format!("{name}: {value}")))?;
        map.insert(name, value);
    }
    Ok(map)
}
