//! Error types for the Stealth JSON-RPC client.

use serde_json::Value;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T, E = RpcError> = std::result::Result<T, E>;

/// Errors surfaced by the transport and the client facade.
///
/// Everything except [`RpcError::Remote`] is a transport-level failure;
/// `Remote` means the daemon answered and reported an error itself.
#[derive(Debug, Error)]
pub enum RpcError {
    /// Connection settings could not be turned into a usable endpoint.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The request envelope could not be serialized.
    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    /// The HTTP client failed before a response was received.
    #[error("Transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The daemon answered with a non-success HTTP status.
    #[error("HTTP {status}: {body}")]
    Http {
        /// HTTP status code
        status: u16,
        /// Raw response body (may be empty)
        body: String,
    },

    /// The daemon answered with an empty body.
    #[error("No response from server")]
    NoResponse,

    /// The body could not be decoded under the configured response policy.
    #[error("Failed to decode response: {0}")]
    Decode(String),

    /// The decoded response carried a truthy `error` field.
    #[error("Server error: {}", describe_remote(.0))]
    Remote(Value),
}

impl RpcError {
    /// True when the daemon itself reported the failure.
    pub fn is_remote(&self) -> bool {
        matches!(self, RpcError::Remote(_))
    }

    /// Numeric `code` of a remote error object, if any.
    pub fn remote_code(&self) -> Option<i64> {
        match self {
            RpcError::Remote(Value::Object(map)) => map.get("code").and_then(Value::as_i64),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for RpcError {
    fn from(err: reqwest::Error) -> Self {
        RpcError::Transport(err)
    }
}

/// Render the `error` field of a response for display.
///
/// Strings are shown verbatim, `{code, message}` objects as
/// `message (code N)`, anything else as JSON text.
pub fn describe_remote(error: &Value) -> String {
    match error {
        Value::String(message) => message.clone(),
        Value::Object(map) => match map.get("message").and_then(Value::as_str) {
            Some(message) => match map.get("code") {
                Some(code) if !code.is_null() => format!("{} (code {})", message, code),
                _ => message.to_string(),
            },
            None => error.to_string(),
        },
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_rpc_error_display() {
        assert_eq!(RpcError::NoResponse.to_string(), "No response from server");

        let http = RpcError::Http {
            status: 401,
            body: String::new(),
        };
        assert_eq!(http.to_string(), "HTTP 401: ");

        let config = RpcError::Config("bad port".to_string());
        assert_eq!(config.to_string(), "Invalid configuration: bad port");
    }

    #[test]
    fn test_remote_error_embeds_message_and_code() {
        let err = RpcError::Remote(json!({"code": -5, "message": "Invalid Stealth address"}));
        assert_eq!(
            err.to_string(),
            "Server error: Invalid Stealth address (code -5)"
        );
        assert!(err.is_remote());
        assert_eq!(err.remote_code(), Some(-5));
    }

    #[test]
    fn test_remote_error_string_and_other_values() {
        let err = RpcError::Remote(json!("wallet locked"));
        assert_eq!(err.to_string(), "Server error: wallet locked");
        assert_eq!(err.remote_code(), None);

        let err = RpcError::Remote(json!(true));
        assert_eq!(err.to_string(), "Server error: true");

        let err = RpcError::Remote(json!({"reason": "busy"}));
        assert_eq!(err.to_string(), r#"Server error: {"reason":"busy"}"#);
    }

    #[test]
    fn test_non_remote_errors() {
        assert!(!RpcError::NoResponse.is_remote());
        assert_eq!(RpcError::NoResponse.remote_code(), None);
    }
}
