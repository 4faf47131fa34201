//! Core traits, types, and error handling for the Community API adapter.
//!
//! This crate provides the foundational abstractions shared by the HTTP
//! client, the MCP server and the CLI.

pub mod backend;
pub mod config;
pub mod error;
pub mod request;
pub mod session;

pub use backend::Backend;
pub use config::Config;
pub use error::{Error, Result};
pub use request::{ApiRequest, HttpMethod};
pub use session::Session;
