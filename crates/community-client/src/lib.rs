//! Community API client for the MCP adapter.
//!
//! This crate carries dispatcher-built requests to the remote Community API
//! over HTTP and relays the responses: JSON bodies unchanged, failures as
//! typed errors carrying the remote status code.

mod client;

pub use client::CommunityClient;

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("community-mcp/", env!("CARGO_PKG_VERSION"));
