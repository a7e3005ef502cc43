//! Coupon creation tool.

use rmcp::handler::server::tool::cached_schema_for_type;
use rmcp::model::Tool;
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::{Map, Value};
use tracing::instrument;

use crate::core::upstream::{
    HttpMethod, OutboundRequest, ResponseContent, UpstreamClient, UpstreamError,
};

/// Parameters for coupon creation.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CouponCreateParams {
    /// Coupon fields sent as the JSON request body. Defaults to an empty
    /// object when absent.
    #[serde(default)]
    #[schemars(description = "Coupon fields sent as the JSON request body")]
    pub body: Value,
}

/// Coupon creation tool implementation.
#[derive(Debug, Clone)]
pub struct CouponCreateTool;

impl CouponCreateTool {
    /// Tool name as registered in MCP.
    pub const NAME: &'static str = "coupon.create";

    /// Tool description shown to clients.
    pub const DESCRIPTION: &'static str = "Create a coupon via POST /coupons with JSON body.";

    /// POST the coupon payload to the fixed `/coupons` path.
    #[instrument(skip_all)]
    pub async fn execute(
        client: &UpstreamClient,
        params: CouponCreateParams,
    ) -> Result<ResponseContent, UpstreamError> {
        let body = match params.body {
            Value::Null => Value::Object(Map::new()),
            body => body,
        };

        let request = OutboundRequest::new(HttpMethod::Post, "/coupons").with_json_body(&body);
        client.send(request).await
    }

    /// Create a Tool model for this tool (metadata).
    pub fn to_tool() -> Tool {
        Tool {
            name: Self::NAME.into(),
            description: Some(Self::DESCRIPTION.into()),
            input_schema: cached_schema_for_type::<CouponCreateParams>(),
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

    #[test]
    fn test_body_defaults_to_null_when_absent() {
        let params: CouponCreateParams = serde_json::from_str("{}").unwrap();
        assert!(params.body.is_null());
    }

    #[test]
    fn test_body_is_taken_verbatim() {
        let params: CouponCreateParams =
            serde_json::from_str(r#"{"body": {"code": "SAVE10"}}"#).unwrap();
        assert_eq!(params.body["code"], "SAVE10");
    }
}
