//! Generic HTTP request tool.
//!
//! Proxies an arbitrary method/path/query/headers/body combination to the
//! upstream service. The convenience tools are fixed partial applications of
//! this behavior.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::core::upstream::{
    HttpMethod, OutboundRequest, ResponseContent, UpstreamClient, UpstreamError, serialize_body,
    value_to_string,
};

/// Parameters for the generic request tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct HttpRequestParams {
    /// HTTP method to use.
    #[schemars(description = "HTTP method: GET, POST, PUT, PATCH or DELETE")]
    pub method: HttpMethod,

    #[schemars(description = "Path starting with /. Example: /coupons")]
    pub path: String,

    /// Optional query parameters; array values repeat the key.
    #[schemars(description = "Optional query parameters")]
    pub query: Option<Map<String, Value>>,

    /// Optional request headers; these override the JSON default.
    #[schemars(description = "Optional request headers")]
    pub headers: Option<Map<String, Value>>,

    /// JSON body for POST/PUT/PATCH; ignored for other methods.
    #[schemars(description = "JSON body for POST/PUT/PATCH")]
    pub body: Option<Value>,
}

/// Generic HTTP request tool implementation.
#[derive(Debug, Clone)]
pub struct HttpRequestTool;

impl HttpRequestTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "http.request";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Generic HTTP request tool. Proxies to the configured \
        base URL. No auth, no DB. For example, GET /coupons, POST /coupons, GET /coupons/{id}.";

    /// Build and send the request described by the arguments.
    ///
    /// Requests default to `content-type: application/json`; caller-supplied
    /// headers override it. The body is serialized only for methods that
    /// carry one.
    #[instrument(skip_all, fields(method = %params.method, path = %params.path))]
    pub async fn execute(
        client: &UpstreamClient,
        params: HttpRequestParams,
    ) -> Result<ResponseContent, UpstreamError> {
        let mut request = OutboundRequest::new(params.method, params.path)
            .with_query(params.query)
            .with_header("content-type", "application/json");

        if let Some(headers) = &params.headers {
            for (name, value) in headers {
                request = request.with_header(name.clone(), value_to_string(value));
            }
        }

        if params.method.needs_body() {
            request.body = serialize_body(params.body.as_ref());
        }

        client.send(request).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<HttpRequestParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
