//! Coupon listing tool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::core::upstream::{
    HttpMethod, OutboundRequest, ResponseContent, UpstreamClient, UpstreamError,
};

/// Parameters for coupon listing.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CouponListParams {
    /// Optional query parameters, e.g. status filters.
    #[schemars(description = "Optional query parameters")]
    pub query: Option<Map<String, Value>>,
}

/// Coupon listing tool implementation.
#[derive(Debug, Clone)]
pub struct CouponListTool;

impl CouponListTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "coupon.list";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str =
        "List coupons via GET /coupons with optional query params.";

    /// GET the coupon collection, forwarding any query parameters.
    pub async fn execute(
        client: &UpstreamClient,
        params: CouponListParams,
    ) -> Result<ResponseContent, UpstreamError> {
        let request = OutboundRequest::new(HttpMethod::Get, "/coupons").with_query(params.query);
        client.send(request).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CouponListParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_query_is_optional() {
        let params: CouponListParams = serde_json::from_str("{}").unwrap();
        assert!(params.query.is_none());

        let params: CouponListParams =
            serde_json::from_value(json!({ "query": { "status": "active" } })).unwrap();
        assert_eq!(params.query.unwrap()["status"], "active");
    }
}
