//! JSON-RPC plumbing for talking to the Stealth daemon.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐        HTTP POST (JSON)       ┌─────────────────────┐
//! │  StealthClient  │  ──────────────────────────►  │   stealthd RPC      │
//! │  (Transport)    │  ◄──────────────────────────  │   (port 46502)      │
//! └─────────────────┘     {"result", "error"}       └─────────────────────┘
//! ```
//!
//! # Protocol
//!
//! Each call is a single POST with `Content-Type: application/json`:
//!
//! ```text
//! {"id":0,"jsonrpc":"2.0","method":"getaddressbalance","params":["XSTtest123"]}
//! ```
//!
//! Basic auth is attached when both username and password are configured.
//! Replies are decoded per [`ResponsePolicy`] and fail with
//! [`RpcError::Remote`] when they carry a truthy `error` field.

mod envelope;
mod error;
mod transport;

pub use envelope::{
    check_response, is_truthy, remote_error, unwrap_result, Params, RequestEnvelope,
    ResponsePolicy,
};
pub use error::{describe_remote, Result, RpcError};
pub use transport::{basic_auth_header, HttpTransport, Transport};
