//! Tool-specific error types.

use thiserror::Error;

use crate::core::upstream::UpstreamError;

/// Errors that can occur while dispatching a tool invocation.
///
/// None of these escape the dispatch boundary; the registry converts every
/// variant into an error-flagged result envelope.
#[derive(Debug, Error)]
pub enum ToolError {
    /// The invocation named a tool outside the catalog.
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    /// The arguments did not match the tool's declared schema.
    #[error("Invalid arguments: {0}")]
    InvalidArguments(String),

    /// Building or executing the upstream request failed.
    #[error(transparent)]
    Upstream(#[from] UpstreamError),
}
