//! Outbound request model and body serialization.

use std::fmt;

use schemars::JsonSchema;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Map, Value};

/// HTTP methods accepted by the proxy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Parse a method token, ignoring case. Unknown tokens are rejected.
    pub fn parse(token: &str) -> Option<Self> {
        match token.to_ascii_uppercase().as_str() {
            "GET" => Some(Self::Get),
            "POST" => Some(Self::Post),
            "PUT" => Some(Self::Put),
            "PATCH" => Some(Self::Patch),
            "DELETE" => Some(Self::Delete),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Get => "GET",
            Self::Post => "POST",
            Self::Put => "PUT",
            Self::Patch => "PATCH",
            Self::Delete => "DELETE",
        }
    }

    /// Whether requests with this method carry a body. Only POST, PUT and
    /// PATCH do; GET and DELETE never send one.
    pub fn needs_body(self) -> bool {
        matches!(self, Self::Post | Self::Put | Self::Patch)
    }

    pub(crate) fn as_reqwest(self) -> reqwest::Method {
        match self {
            Self::Get => reqwest::Method::GET,
            Self::Post => reqwest::Method::POST,
            Self::Put => reqwest::Method::PUT,
            Self::Patch => reqwest::Method::PATCH,
            Self::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// Case-insensitive deserialization; the declared schema advertises the
// uppercase spellings.
impl<'de> Deserialize<'de> for HttpMethod {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let token = String::deserialize(deserializer)?;
        Self::parse(&token)
            .ok_or_else(|| serde::de::Error::custom(format!("unknown HTTP method: {token}")))
    }
}

/// Serialize a caller-supplied body value to a wire body.
///
/// Absent and null bodies produce no body at all. Strings pass through
/// unchanged so callers can send raw payloads. Anything else is JSON-encoded,
/// falling back to its display form; serialization never fails.
pub fn serialize_body(body: Option<&Value>) -> Option<String> {
    match body {
        None | Some(Value::Null) => None,
        Some(Value::String(raw)) => Some(raw.clone()),
        Some(other) => Some(serde_json::to_string(other).unwrap_or_else(|_| other.to_string())),
    }
}

/// A single outbound request against the upstream service.
///
/// Built fresh for every invocation and consumed by
/// [`UpstreamClient::send`](super::UpstreamClient::send); never reused.
#[derive(Debug, Clone)]
pub struct OutboundRequest {
    pub method: HttpMethod,

    /// Relative path; normalized against the base address when sent.
    pub path: String,

    /// Optional query parameters.
    pub query: Option<Map<String, Value>>,

    /// Ordered header list. Names compare case-insensitively when the
    /// request is sent, and the last occurrence of a name wins.
    pub headers: Vec<(String, String)>,

    /// Pre-serialized body, if the request carries one.
    pub body: Option<String>,
}

impl OutboundRequest {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: None,
            headers: Vec::new(),
            body: None,
        }
    }

    /// Attach query parameters.
    pub fn with_query(mut self, query: Option<Map<String, Value>>) -> Self {
        self.query = query;
        self
    }

    /// Append a header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    /// Attach a JSON body, setting `content-type: application/json`. A null
    /// body leaves the request without a body or content type.
    pub fn with_json_body(mut self, body: &Value) -> Self {
        if let Some(serialized) = serialize_body(Some(body)) {
            self.headers
                .push(("content-type".to_string(), "application/json".to_string()));
            self.body = Some(serialized);
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_needs_body_under_any_casing() {
        for token in ["POST", "post", "Put", "pAtCh"] {
            let method = HttpMethod::parse(token).unwrap();
            assert!(method.needs_body(), "{token} should carry a body");
        }
        for token in ["GET", "get", "DELETE", "Delete"] {
            let method = HttpMethod::parse(token).unwrap();
            assert!(!method.needs_body(), "{token} should not carry a body");
        }
    }

    #[test]
    fn test_unknown_method_tokens_are_rejected() {
        assert_eq!(HttpMethod::parse("HEAD"), None);
        assert_eq!(HttpMethod::parse("OPTIONS"), None);
        assert_eq!(HttpMethod::parse(""), None);
    }

    #[test]
    fn test_method_deserializes_case_insensitively() {
        let method: HttpMethod = serde_json::from_str(r#""post""#).unwrap();
        assert_eq!(method, HttpMethod::Post);
        assert!(serde_json::from_str::<HttpMethod>(r#""TRACE""#).is_err());
    }

    #[test]
    fn test_serialize_body_absent_and_null() {
        assert_eq!(serialize_body(None), None);
        assert_eq!(serialize_body(Some(&Value::Null)), None);
    }

    #[test]
    fn test_serialize_body_string_passthrough() {
        let body = json!("raw payload");
        assert_eq!(serialize_body(Some(&body)).as_deref(), Some("raw payload"));
    }

    #[test]
    fn test_serialize_body_structured_round_trips() {
        let body = json!({ "a": 1 });
        let wire = serialize_body(Some(&body)).unwrap();
        let decoded: Value = serde_json::from_str(&wire).unwrap();
        assert_eq!(decoded, body);
    }

    #[test]
    fn test_with_json_body_sets_content_type() {
        let request =
            OutboundRequest::new(HttpMethod::Post, "/coupons").with_json_body(&json!({}));
        assert_eq!(request.body.as_deref(), Some("{}"));
        assert!(
            request
                .headers
                .iter()
                .any(|(name, value)| name == "content-type" && value == "application/json")
        );
    }

    #[test]
    fn test_with_json_body_null_is_a_no_op() {
        let request =
            OutboundRequest::new(HttpMethod::Post, "/coupons").with_json_body(&Value::Null);
        assert_eq!(request.body, None);
        assert!(request.headers.is_empty());
    }
}
