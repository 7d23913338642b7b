//! HTTP transport for JSON-RPC requests.
//!
//! This module provides the [`Transport`] trait that the client facade
//! talks to, and [`HttpTransport`], the reqwest-backed implementation that
//! POSTs request envelopes to the daemon.

use async_trait::async_trait;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;
use tracing::{debug, info, warn};
use url::Url;

use crate::config::StealthConfig;
use crate::rpc::envelope::{check_response, remote_error, RequestEnvelope, ResponsePolicy};
use crate::rpc::error::{Result, RpcError};

/// Trait for sending a single request envelope.
///
/// This trait abstracts the wire to enable:
/// - Dependency injection for testing with recording implementations
/// - Alternative transports without touching the method surface
#[async_trait]
pub trait Transport: Send + Sync {
    /// Send one request and return the decoded, error-checked response.
    ///
    /// # Errors
    ///
    /// Returns a transport-kind error if no usable response was obtained,
    /// or `RpcError::Remote` if the response carries a truthy `error`.
    async fn send(&self, request: &RequestEnvelope) -> Result<Value>;
}

/// Value of the `Authorization` header for HTTP Basic auth.
pub fn basic_auth_header(username: &str, password: &str) -> String {
    format!("Basic {}", STANDARD.encode(format!("{}:{}", username, password)))
}

/// reqwest-backed transport.
///
/// Stateless apart from the underlying HTTP client; one instance can serve
/// any number of concurrent calls.
pub struct HttpTransport {
    http: Client,
    endpoint: Url,
    authorization: Option<String>,
    policy: ResponsePolicy,
    debug: bool,
}

impl HttpTransport {
    /// Create a transport for the given connection settings.
    ///
    /// # Errors
    ///
    /// Returns `RpcError::Config` if the endpoint URL is invalid or the HTTP
    /// client cannot be built.
    pub fn new(config: &StealthConfig) -> Result<Self> {
        let endpoint = config.endpoint()?;
        let authorization = config
            .credentials()
            .map(|(user, pass)| basic_auth_header(user, pass));

        let http = Client::builder()
            .build()
            .map_err(|e| RpcError::Config(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            http,
            endpoint,
            authorization,
            policy: config.response_policy,
            debug: config.debug,
        })
    }

    /// URL every request is POSTed to.
    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    /// Whether an `Authorization` header is attached to requests.
    pub fn has_credentials(&self) -> bool {
        self.authorization.is_some()
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn send(&self, request: &RequestEnvelope) -> Result<Value> {
        let body = serde_json::to_string(request)?;

        debug!(method = %request.method, id = request.id, "Sending RPC request");
        if self.debug {
            info!(url = %self.endpoint, body = %body, "RPC request");
        }

        let mut builder = self
            .http
            .post(self.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .body(body);

        if let Some(authorization) = &self.authorization {
            builder = builder.header(AUTHORIZATION, authorization);
        }

        let response = builder.send().await.map_err(|e| {
            warn!(method = %request.method, id = request.id, error = %e, "RPC transport failed");
            RpcError::Transport(e)
        })?;

        let status = response.status();
        let text = response.text().await?;

        if self.debug {
            info!(status = status.as_u16(), body = %text, "RPC response");
        }

        if !status.is_success() {
            // The daemon reports RPC failures as 4xx/5xx with an error envelope
            if let Ok(decoded) = self.policy.decode(&text) {
                if let Some(error) = remote_error(&decoded) {
                    return Err(RpcError::Remote(error.clone()));
                }
            }
            warn!(
                method = %request.method,
                id = request.id,
                status = status.as_u16(),
                "RPC request returned HTTP error"
            );
            return Err(RpcError::Http {
                status: status.as_u16(),
                body: text,
            });
        }

        check_response(self.policy.decode(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_auth_header() {
        assert_eq!(basic_auth_header("user", "pass"), "Basic dXNlcjpwYXNz");
        assert_eq!(
            basic_auth_header("rpcuser", "s3cr3t:with:colons"),
            format!("Basic {}", STANDARD.encode("rpcuser:s3cr3t:with:colons"))
        );
    }

    #[test]
    fn test_http_transport_endpoint() {
        let config = StealthConfig {
            port: Some(46503),
            ..StealthConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert_eq!(transport.endpoint().as_str(), "http://localhost:46503/");
        assert!(!transport.has_credentials());
    }

    #[test]
    fn test_http_transport_credentials() {
        let config = StealthConfig {
            username: Some("user".to_string()),
            password: Some("pass".to_string()),
            ..StealthConfig::default()
        };
        let transport = HttpTransport::new(&config).unwrap();
        assert!(transport.has_credentials());

        let half = StealthConfig {
            password: Some("pass".to_string()),
            ..StealthConfig::default()
        };
        assert!(!HttpTransport::new(&half).unwrap().has_credentials());
    }

    #[test]
    fn test_http_transport_invalid_endpoint() {
        let config = StealthConfig {
            host: "bad host".to_string(),
            ..StealthConfig::default()
        };
        assert!(matches!(
            HttpTransport::new(&config),
            Err(RpcError::Config(_))
        ));
    }
}
