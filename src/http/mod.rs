//! HTTP-ish request handling.
//!
//! Each accepted client is served by a [`connection::Connection`], which
//! handles exactly one request and then closes:
//!
//! ```text
//!        ┌─────────────┐
//!        │   Reading   │ ← one read, request line parsed
//!        └──────┬──────┘
//!               │ GET with a safe path
//!               ▼
//!        ┌──────────────────┐
//!        │   Processing     │ ← resolve path, mime type, open file
//!        └──────┬───────────┘
//!               │ file (or 404 page) open
//!               ▼
//!        ┌──────────────────┐
//!        │    Writing       │ ← header block, then the file
//!        └──────┬───────────┘
//!               ▼
//!             Closed
//! ```
//!
//! Anything that goes wrong before `Writing` closes the socket without a
//! response.
//!
//! - **`connection`**: the per-client state machine
//! - **`parser`**: request line tokenizing
//! - **`request`**: the parsed request line
//! - **`path`**: document-root sandboxing
//! - **`mime`**: extension to content type table
//! - **`response`**: status codes and the header block
//! - **`writer`**: sends the header and streams the file

pub mod connection;
pub mod mime;
pub mod parser;
pub mod path;
pub mod request;
pub mod response;
pub mod writer;
