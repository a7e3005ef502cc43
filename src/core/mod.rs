//! Core module containing shared infrastructure components.
//!
//! This module provides the foundational building blocks for the MCP server,
//! including configuration, server lifecycle management, the transport layer,
//! and the upstream HTTP plumbing every tool request flows through.

pub mod config;
pub mod server;
pub mod transport;
pub mod upstream;

pub use config::Config;
pub use server::McpServer;
pub use transport::{StdioTransport, TransportError, TransportResult};
pub use upstream::UpstreamClient;
