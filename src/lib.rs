//! staticd - minimal static file server
//!
//! Serves files from one document root over a bare request-line protocol,
//! one request per connection.

pub mod config;
pub mod daemon;
pub mod http;
pub mod server;
