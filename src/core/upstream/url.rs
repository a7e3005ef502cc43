//! Request URL construction.

use serde_json::{Map, Value};
use url::Url;

use super::error::UpstreamError;

/// Compose a request URL from the base address, a relative path, and an
/// optional query map.
///
/// The path is normalized to start with `/`; an empty path becomes `/`.
/// Array-valued query entries append one parameter per element, preserving
/// element order; null entries are skipped; everything else is stringified.
pub fn build_url(
    base: &str,
    path: &str,
    query: Option<&Map<String, Value>>,
) -> Result<Url, UpstreamError> {
    let path = normalize_path(path);
    let mut url = Url::parse(&format!("{}{}", base.trim_end_matches('/'), path))?;

    let pairs = query.map(collect_query_pairs).unwrap_or_default();
    if !pairs.is_empty() {
        let mut serializer = url.query_pairs_mut();
        for (key, value) in &pairs {
            serializer.append_pair(key, value);
        }
    }

    Ok(url)
}

fn normalize_path(path: &str) -> String {
    if path.is_empty() {
        "/".to_string()
    } else if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}

fn collect_query_pairs(query: &Map<String, Value>) -> Vec<(String, String)> {
    let mut pairs = Vec::new();
    for (key, value) in query {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                pairs.extend(items.iter().map(|item| (key.clone(), value_to_string(item))));
            }
            other => pairs.push((key.clone(), value_to_string(other))),
        }
    }
    pairs
}

/// Stringify a JSON value for use in a query parameter or header.
pub(crate) fn value_to_string(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Null => String::new(),
        _ => value.to_string(),
    }
}

/// Percent-encode a single path segment, keeping only unreserved characters.
pub fn encode_path_segment(segment: &str) -> String {
    const HEX: &[u8; 16] = b"0123456789ABCDEF";
    let mut out = String::with_capacity(segment.len());
    for &byte in segment.as_bytes() {
        if matches!(byte, b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~') {
            out.push(byte as char);
        } else {
            out.push('%');
            out.push(HEX[(byte >> 4) as usize] as char);
            out.push(HEX[(byte & 0x0F) as usize] as char);
        }
    }
    out
}
