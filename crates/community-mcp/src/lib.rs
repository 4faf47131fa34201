//! MCP (Model Context Protocol) server for the Community API.
//!
//! This crate implements the MCP server that exposes the Community API's
//! endpoints to AI agents as callable tools, one HTTP request per call.

pub mod handlers;
pub mod protocol;
pub mod server;
pub mod tools;
pub mod transport;

pub use handlers::ToolHandler;
pub use server::McpServer;
