//! Jutuike public promotion listing tool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::upstream::{
    HttpMethod, OutboundRequest, ResponseContent, UpstreamClient, UpstreamError,
};

/// Fixed upstream path for the public promotion listing.
const PROMO_LIST_PATH: &str = "/api/mcp/jutuike/public_promo_list";

/// Parameters for the promotion listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct JutuikePromoListParams {
    /// Optional query parameters.
    #[schemars(description = "Optional query parameters")]
    pub query: Option<Map<String, Value>>,
}

/// Jutuike promotion listing tool implementation.
#[derive(Debug, Clone)]
pub struct JutuikePromoListTool;

impl JutuikePromoListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "jutuike.public_promo_list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "GET /api/mcp/jutuike/public_promo_list with optional query params.";

    /// GET the promotion listing, forwarding any query parameters.
    pub async fn execute(
        client: &UpstreamClient,
        params: JutuikePromoListParams,
    ) -> Result<ResponseContent, UpstreamError> {
        let request =
            OutboundRequest::new(HttpMethod::Get, PROMO_LIST_PATH).with_query(params.query);
        client.send(request).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<JutuikePromoListParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
