//! Transport layer for the MCP server.
//!
//! The server speaks MCP over standard input/output, the default transport
//! for locally spawned servers. The transport owns connection setup and hands
//! message processing to the server handler.

mod error;
mod stdio;

pub use error::{TransportError, TransportResult};
pub use stdio::StdioTransport;
