//! Stealth RPC Library
//!
//! Typed async client for the Stealth (XST) daemon's JSON-RPC interface:
//!
//! - `client` - `StealthClient`, one method per daemon call
//! - `config` - connection settings (options object, URL or environment)
//! - `rpc` - request envelopes, response decoding and the HTTP transport
//! - `types` - structured call arguments
//!
//! # Usage
//!
//! ```ignore
//! use stealth_rpc::{StealthClient, StealthConfig};
//!
//! let client = StealthClient::new(StealthConfig::from_env()?)?;
//! let info = client.getinfo().await?;
//! let hash = client.getblockhash(1000).await?;
//! ```
//!
//! Calls are stateless pass-throughs: arguments are converted to a
//! positional parameter list, POSTed, and the `result` field of the reply is
//! returned. Nothing is retried or cached; wrap calls in
//! `tokio::time::timeout` if a deadline is needed.

pub mod client;
pub mod config;
pub mod rpc;
pub mod types;

pub use client::{PendingCall, StealthClient};
pub use config::StealthConfig;
pub use rpc::{Params, ResponsePolicy, Result, RpcError, Transport};
pub use types::{AddressAmounts, OutPoint, PrevTx, PurchaseStakerOptions};
