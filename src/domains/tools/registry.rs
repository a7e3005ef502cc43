//! Tool Registry - static catalog and dispatch for all tools.
//!
//! This module provides:
//! - An enumerated identifier for every tool in the catalog
//! - Tool metadata for listing
//! - Dispatch of invocations to the matching tool strategy
//!
//! Dispatch never fails: unknown tools, schema violations, and upstream
//! failures all come back as error-flagged result envelopes, and an unknown
//! tool is rejected before any I/O happens.

use std::sync::Arc;

use rmcp::model::{CallToolResult, Content, Tool};
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::warn;

use crate::core::config::Config;
use crate::core::upstream::{ResponseContent, UpstreamClient};

use super::definitions::{
    CouponCreateTool, CouponGetTool, CouponListTool, HttpRequestTool, JutuikePromoListTool,
};
use super::error::ToolError;

/// Enumerated identifier for every tool in the catalog.
///
/// Dispatch routes on this instead of raw name strings so the strategy table
/// stays exhaustive: adding a variant forces the remaining match arms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToolKind {
    HttpRequest,
    CouponCreate,
    CouponGet,
    CouponList,
    JutuikePromoList,
}

impl ToolKind {
    /// Every tool, in catalog order.
    pub const ALL: [Self; 5] = [
        Self::HttpRequest,
        Self::CouponCreate,
        Self::CouponGet,
        Self::CouponList,
        Self::JutuikePromoList,
    ];

    /// Resolve a tool name to its identifier.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            HttpRequestTool::NAME => Some(Self::HttpRequest),
            CouponCreateTool::NAME => Some(Self::CouponCreate),
            CouponGetTool::NAME => Some(Self::CouponGet),
            CouponListTool::NAME => Some(Self::CouponList),
            JutuikePromoListTool::NAME => Some(Self::JutuikePromoList),
            _ => None,
        }
    }

    /// The tool name as registered in MCP.
    pub fn name(self) -> &'static str {
        match self {
            Self::HttpRequest => HttpRequestTool::NAME,
            Self::CouponCreate => CouponCreateTool::NAME,
            Self::CouponGet => CouponGetTool::NAME,
            Self::CouponList => CouponListTool::NAME,
            Self::JutuikePromoList => JutuikePromoListTool::NAME,
        }
    }

    /// Tool metadata for listing.
    fn tool(self) -> Tool {
        match self {
            Self::HttpRequest => HttpRequestTool::to_tool(),
            Self::CouponCreate => CouponCreateTool::to_tool(),
            Self::CouponGet => CouponGetTool::to_tool(),
            Self::CouponList => CouponListTool::to_tool(),
            Self::JutuikePromoList => JutuikePromoListTool::to_tool(),
        }
    }
}

/// Tool registry - the static catalog plus dispatch.
pub struct ToolRegistry {
    client: UpstreamClient,
}

impl ToolRegistry {
    /// Create a new tool registry.
    pub fn new(config: Arc<Config>) -> Self {
        Self {
            client: UpstreamClient::new(&config.upstream),
        }
    }

    /// Get all tool names.
    pub fn tool_names(&self) -> Vec<&'static str> {
        ToolKind::ALL.iter().map(|kind| kind.name()).collect()
    }

    /// Get all tools as metadata. Pure read; the catalog never changes.
    pub fn list_tools(&self) -> Vec<Tool> {
        ToolKind::ALL.iter().map(|kind| kind.tool()).collect()
    }

    /// Dispatch a tool invocation to the matching strategy.
    ///
    /// Always returns an envelope; see the module docs for the failure
    /// taxonomy.
    pub async fn dispatch(&self, name: &str, arguments: Map<String, Value>) -> CallToolResult {
        match self.execute(name, arguments).await {
            Ok(content) => content.into_call_tool_result(),
            Err(ToolError::Upstream(err)) => error_result(format!("Request failed: {err}")),
            Err(err) => error_result(err.to_string()),
        }
    }

    async fn execute(
        &self,
        name: &str,
        arguments: Map<String, Value>,
    ) -> Result<ResponseContent, ToolError> {
        let Some(kind) = ToolKind::from_name(name) else {
            return Err(ToolError::UnknownTool(name.to_string()));
        };

        let client = &self.client;
        let content = match kind {
            ToolKind::HttpRequest => {
                HttpRequestTool::execute(client, parse_params(arguments)?).await?
            }
            ToolKind::CouponCreate => {
                CouponCreateTool::execute(client, parse_params(arguments)?).await?
            }
            ToolKind::CouponGet => CouponGetTool::execute(client, parse_params(arguments)?).await?,
            ToolKind::CouponList => {
                CouponListTool::execute(client, parse_params(arguments)?).await?
            }
            ToolKind::JutuikePromoList => {
                JutuikePromoListTool::execute(client, parse_params(arguments)?).await?
            }
        };
        Ok(content)
    }
}

/// Deserialize raw arguments against the tool's typed parameter struct.
fn parse_params<T: DeserializeOwned>(arguments: Map<String, Value>) -> Result<T, ToolError> {
    serde_json::from_value(Value::Object(arguments))
        .map_err(|err| ToolError::InvalidArguments(err.to_string()))
}

/// Create an error-flagged result envelope.
fn error_result(message: String) -> CallToolResult {
    warn!("{message}");
    CallToolResult::error(vec![Content::text(message)])
}
