//! Upstream response decoding.

use reqwest::StatusCode;
use rmcp::model::{CallToolResult, Content};
use serde_json::Value;

use super::error::UpstreamError;

/// Decoded upstream response content.
///
/// Exactly one variant per response: structured data when the upstream
/// declared a JSON content type and the body parsed, text otherwise.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseContent {
    Json(Value),
    Text(String),
}

impl ResponseContent {
    /// Convert into the MCP result envelope.
    ///
    /// JSON responses are surfaced both as `structured_content` and as a
    /// serialized text item; some MCP clients only render `content`.
    pub fn into_call_tool_result(self) -> CallToolResult {
        match self {
            Self::Json(value) => {
                let text = serde_json::to_string(&value).unwrap_or_else(|_| value.to_string());
                CallToolResult {
                    content: vec![Content::text(text)],
                    structured_content: Some(value),
                    is_error: Some(false),
                    meta: None,
                }
            }
            Self::Text(text) => CallToolResult::success(vec![Content::text(text)]),
        }
    }
}

/// Read a response body and decode it.
///
/// Failing to read the body at all is a transport error; everything after
/// that point decodes without failing.
pub async fn read_response(response: reqwest::Response) -> Result<ResponseContent, UpstreamError> {
    let status = response.status();
    let content_type = response
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = response.bytes().await?;

    Ok(decode_body(status, content_type.as_deref(), &body))
}

/// Decode a response body.
///
/// Two-step decode with an explicit fallback: when the declared content type
/// is JSON and the body parses, the structured value is returned; in every
/// other case (non-JSON content type, missing content type, malformed body)
/// the raw text is returned prefixed with the status code. The status code
/// itself is never an error condition here; a 4xx/5xx JSON body still
/// decodes as JSON.
pub fn decode_body(status: StatusCode, content_type: Option<&str>, body: &[u8]) -> ResponseContent {
    if is_json(content_type) {
        if let Ok(value) = serde_json::from_slice(body) {
            return ResponseContent::Json(value);
        }
    }

    let text = String::from_utf8_lossy(body);
    ResponseContent::Text(format!("Status {}: {}", status.as_u16(), text))
}

fn is_json(content_type: Option<&str>) -> bool {
    content_type.is_some_and(|ct| ct.to_ascii_lowercase().contains("application/json"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_json_body_decodes_as_structured() {
        let content = decode_body(
            StatusCode::OK,
            Some("application/json"),
            br#"{"id":"c1"}"#,
        );
        assert_eq!(content, ResponseContent::Json(json!({ "id": "c1" })));
    }

    #[test]
    fn test_json_decodes_regardless_of_status() {
        let content = decode_body(
            StatusCode::NOT_FOUND,
            Some("application/json"),
            br#"{"error":"missing"}"#,
        );
        assert_eq!(content, ResponseContent::Json(json!({ "error": "missing" })));
    }

    #[test]
    fn test_content_type_match_is_case_insensitive() {
        let content = decode_body(
            StatusCode::OK,
            Some("Application/JSON; charset=utf-8"),
            b"[1,2]",
        );
        assert_eq!(content, ResponseContent::Json(json!([1, 2])));
    }

    #[test]
    fn test_plain_text_falls_back_with_status_prefix() {
        let content = decode_body(StatusCode::INTERNAL_SERVER_ERROR, Some("text/plain"), b"boom");
        assert_eq!(content, ResponseContent::Text("Status 500: boom".to_string()));
    }

    #[test]
    fn test_missing_content_type_falls_back() {
        let content = decode_body(StatusCode::OK, None, b"hello");
        assert_eq!(content, ResponseContent::Text("Status 200: hello".to_string()));
    }

    #[test]
    fn test_malformed_json_falls_back_silently() {
        let content = decode_body(StatusCode::OK, Some("application/json"), b"{truncated");
        assert_eq!(
            content,
            ResponseContent::Text("Status 200: {truncated".to_string())
        );
    }

    #[test]
    fn test_json_result_carries_structured_content() {
        let result = ResponseContent::Json(json!({ "id": "c1" })).into_call_tool_result();
        assert_eq!(result.is_error, Some(false));
        assert_eq!(result.structured_content, Some(json!({ "id": "c1" })));
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => {
                assert_eq!(text.text, r#"{"id":"c1"}"#);
            }
            other => panic!("expected text content, got {other:?}"),
        }
    }

    #[test]
    fn test_text_result_is_plain_success() {
        let result = ResponseContent::Text("Status 200: ok".to_string()).into_call_tool_result();
        assert_ne!(result.is_error, Some(true));
        assert_eq!(result.structured_content, None);
        match &result.content[0].raw {
            rmcp::model::RawContent::Text(text) => assert_eq!(text.text, "Status 200: ok"),
            other => panic!("expected text content, got {other:?}"),
        }
    }
}
