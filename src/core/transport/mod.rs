//! Transport layer for the MCP server.
//!
//! One transport is provided: an HTTP server speaking JSON-RPC over POST
//! requests on a single endpoint. The transport owns the connection
//! lifecycle and delegates message processing to the prompt server.

mod config;
mod error;
pub mod http;

pub use config::HttpConfig;
pub use error::{TransportError, TransportResult};
pub use http::HttpTransport;
