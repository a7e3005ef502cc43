//! Coupon lookup tool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::core::upstream::{
    HttpMethod, OutboundRequest, ResponseContent, UpstreamClient, UpstreamError,
    encode_path_segment,
};

/// Parameters for coupon lookup.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CouponGetParams {
    /// Coupon identifier; percent-encoded into the request path.
    #[schemars(description = "Coupon id")]
    pub id: String,
}

/// Coupon lookup tool implementation.
#[derive(Debug, Clone)]
pub struct CouponGetTool;

impl CouponGetTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "coupon.get";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Get a coupon by id via GET /coupons/{id}.";

    /// GET the coupon with the given id.
    pub async fn execute(
        client: &UpstreamClient,
        params: CouponGetParams,
    ) -> Result<ResponseContent, UpstreamError> {
        let path = format!("/coupons/{}", encode_path_segment(&params.id));
        client.send(OutboundRequest::new(HttpMethod::Get, path)).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CouponGetParams>(),
            annotations: None,
            output_schema: None,
            icons: None,
            meta: None,
            title: None,
        }
    }
}
