//! Coupon MCP Server Library
//!
//! This crate provides a Model Context Protocol (MCP) server that proxies
//! tool calls as HTTP requests to a fixed upstream coupon service.
//!
//! # Architecture
//!
//! The server is organized into the following modules:
//!
//! - **core**: Core infrastructure including configuration, the main server,
//!   the stdio transport, and the upstream HTTP plumbing
//! - **domains**: Business logic organized by bounded contexts
//!   - **tools**: the tool catalog and dispatch, one definition file per tool
//!
//! # Example
//!
//! ```rust,no_run
//! use coupon_mcp_server::core::{Config, McpServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = McpServer::new(config);
//!     // Hand the server to the stdio transport...
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use core::{Config, McpServer};
