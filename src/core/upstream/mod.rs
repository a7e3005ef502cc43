//! Upstream HTTP plumbing shared by all tools.
//!
//! Every tool invocation becomes exactly one HTTP request against the
//! configured base address. This module owns the translation steps:
//!
//! - `url` - composing the request URL from base, path, and query map
//! - `request` - the outbound request model and body serialization
//! - `response` - content-type driven decoding into a result value
//! - `client` - executing the request over `reqwest`
//!
//! HTTP status codes are never treated as errors here; an upstream 4xx/5xx
//! body is decoded and surfaced like any other response.

mod client;
mod error;
mod request;
mod response;
mod url;

pub use client::UpstreamClient;
pub use error::UpstreamError;
pub use request::{HttpMethod, OutboundRequest, serialize_body};
pub use response::{ResponseContent, decode_body, read_response};
pub use self::url::{build_url, encode_path_segment};

pub(crate) use self::url::value_to_string;
