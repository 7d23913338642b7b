//! Client facade over the Stealth daemon's JSON-RPC method set.
//!
//! [`StealthClient`] owns the connection settings, a [`Transport`] and the
//! request-id counter. Every daemon call is a thin wrapper that turns typed
//! arguments into a positional [`Params`] list and hands it to
//! [`StealthClient::request`]. The wrappers live in the submodules, grouped
//! by area.

use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::task::{Context, Poll};

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::StealthConfig;
use crate::rpc::{
    unwrap_result, HttpTransport, Params, RequestEnvelope, Result, RpcError, Transport,
};

mod blockchain;
mod node;
mod staking;
mod transactions;
mod wallet;

#[cfg(test)]
pub(crate) mod test_util;

/// Client for the Stealth daemon.
///
/// Cheap to share behind an `Arc`; calls take `&self` and may run
/// concurrently. Each call gets a distinct id from an atomic counter that
/// starts at 0 and advances by one per issued call, whether or not the
/// call later succeeds.
///
/// # Example
///
/// ```ignore
/// use stealth_rpc::{StealthClient, StealthConfig};
///
/// let client = StealthClient::new(StealthConfig {
///     port: Some(46503),
///     ..StealthConfig::default()
/// })?;
///
/// let balance = client.getaddressbalance("SRpqVGg8rKW3HSrYQAY1HaKLsGSSe2tdKt").await?;
/// let count: u64 = client.getblockcount().decode().await?;
/// ```
pub struct StealthClient {
    config: StealthConfig,
    transport: Arc<dyn Transport>,
    /// Id handed to the next issued call.
    request_id: AtomicU64,
}

impl StealthClient {
    /// Create a client that talks HTTP to the configured daemon.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Config` if the endpoint cannot be built.
    pub fn new(config: StealthConfig) -> Result<Self> {
        let config = config.normalized();
        let transport = HttpTransport::new(&config)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client from a bare base URL, e.g. `http://127.0.0.1:46502`.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Config` if the URL is invalid.
    pub fn from_url(url: &str) -> Result<Self> {
        Self::new(StealthConfig::from_url(url)?)
    }

    /// Create a client over an arbitrary transport.
    pub fn with_transport(config: StealthConfig, transport: Arc<dyn Transport>) -> Self {
        Self {
            config: config.normalized(),
            transport,
            request_id: AtomicU64::new(0),
        }
    }

    /// Normalized connection settings this client was built with.
    pub fn config(&self) -> &StealthConfig {
        &self.config
    }

    /// Id the next issued call will carry.
    pub fn next_request_id(&self) -> u64 {
        self.request_id.load(Ordering::SeqCst)
    }

    /// Issue a call to `method` with positional `params`.
    ///
    /// The id is assigned here, when the call is issued, not when the
    /// returned future is first polled. Awaiting the [`PendingCall`] yields
    /// the unwrapped `result` (or `{}` when the reply has none).
    ///
    /// # Example
    ///
    /// ```ignore
    /// let info = client.request("getinfo", Params::new()).await?;
    /// let block = client.request("getblockhash", vec![json!(1000)]).await?;
    /// ```
    pub fn request(&self, method: &str, params: impl Into<Params>) -> PendingCall {
        let id = self.request_id.fetch_add(1, Ordering::SeqCst);
        let envelope = RequestEnvelope::new(method, params.into(), id, &self.config.json_rpc);
        let transport = Arc::clone(&self.transport);

        PendingCall::new(id, async move {
            let response = transport.send(&envelope).await?;
            Ok(unwrap_result(response))
        })
    }
}

impl fmt::Debug for StealthClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StealthClient")
            .field("host", &self.config.host)
            .field("port", &self.config.port)
            .field("next_request_id", &self.next_request_id())
            .finish_non_exhaustive()
    }
}

/// An issued RPC call.
///
/// A `'static + Send` future, so it can be spawned onto a runtime. Resolves
/// to the unwrapped `result` value.
#[must_use = "the call is only sent when the future is awaited"]
pub struct PendingCall {
    id: u64,
    inner: Pin<Box<dyn Future<Output = Result<Value>> + Send>>,
}

impl PendingCall {
    fn new<F>(id: u64, future: F) -> Self
    where
        F: Future<Output = Result<Value>> + Send + 'static,
    {
        Self {
            id,
            inner: Box::pin(future),
        }
    }

    /// Request id carried by this call.
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Await the call and deserialize the result into `T`.
    ///
    /// # Errors
    ///
    /// Any error of the call itself, or `RpcError::Decode` if the result
    /// does not have the expected shape.
    pub async fn decode<T: DeserializeOwned>(self) -> Result<T> {
        let id = self.id;
        let value = self.await?;
        serde_json::from_value(value)
            .map_err(|e| RpcError::Decode(format!("Unexpected result for request {}: {}", id, e)))
    }
}

impl Future for PendingCall {
    type Output = Result<Value>;

    fn poll(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        self.inner.as_mut().poll(cx)
    }
}

impl fmt::Debug for PendingCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PendingCall").field("id", &self.id).finish_non_exhaustive()
    }
}
