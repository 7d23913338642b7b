//! JSON-RPC request/response envelopes.
//!
//! Requests are built fresh per call from a [`Params`] list. Responses are
//! decoded according to a [`ResponsePolicy`] and then unwrapped into the
//! value handed back to the caller.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::rpc::error::{Result, RpcError};

/// Positional parameter list for a single call.
///
/// Each slot is either present or absent. Absent slots are dropped when the
/// envelope is built, so later arguments shift left, exactly as the daemon's
/// positional signature expects when optional trailing values are unset.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Params(Vec<Option<Value>>);

impl Params {
    /// Empty parameter list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an argument that is always sent.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.0.push(Some(value.into()));
        self
    }

    /// Append an argument that is sent only when `Some`.
    pub fn opt<T: Into<Value>>(mut self, value: Option<T>) -> Self {
        self.0.push(value.map(Into::into));
        self
    }

    /// Append a string argument that is sent only when `Some` and non-empty.
    pub fn opt_str(mut self, value: Option<&str>) -> Self {
        self.0.push(value.filter(|s| !s.is_empty()).map(Value::from));
        self
    }

    /// Number of slots, present or not.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Present values in order.
    pub fn into_values(self) -> Vec<Value> {
        self.0.into_iter().flatten().collect()
    }
}

impl From<Vec<Value>> for Params {
    fn from(values: Vec<Value>) -> Self {
        Self(values.into_iter().map(Some).collect())
    }
}

impl FromIterator<Option<Value>> for Params {
    fn from_iter<I: IntoIterator<Item = Option<Value>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Outgoing JSON-RPC request body.
///
/// Field order matches the wire format: `{id, jsonrpc, method, params}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestEnvelope {
    pub id: u64,
    pub jsonrpc: String,
    pub method: String,
    pub params: Vec<Value>,
}

impl RequestEnvelope {
    /// Build an envelope. The method name is lower-cased and absent
    /// parameters are removed.
    pub fn new(method: &str, params: Params, id: u64, version: &str) -> Self {
        Self {
            id,
            jsonrpc: version.to_string(),
            method: method.to_lowercase(),
            params: params.into_values(),
        }
    }
}

/// How response bodies are decoded.
///
/// Daemons and proxies differ in what they put on the wire; this is the one
/// place that decides which bodies are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ResponsePolicy {
    /// Parse bodies starting with `[` as JSON (objects are always parsed).
    pub parse_arrays: bool,
    /// Hand back non-JSON bodies as a JSON string instead of failing.
    pub accept_raw_text: bool,
}

impl Default for ResponsePolicy {
    fn default() -> Self {
        Self {
            parse_arrays: true,
            accept_raw_text: true,
        }
    }
}

impl ResponsePolicy {
    /// Only JSON objects are accepted.
    pub fn strict() -> Self {
        Self {
            parse_arrays: false,
            accept_raw_text: false,
        }
    }

    /// Decode a raw response body.
    ///
    /// # Errors
    ///
    /// - `RpcError::NoResponse` if the body is empty or whitespace
    /// - `RpcError::Decode` if the body is not acceptable under this policy
    pub fn decode(&self, body: &str) -> Result<Value> {
        let trimmed = body.trim();
        if trimmed.is_empty() {
            return Err(RpcError::NoResponse);
        }

        let looks_like_json =
            trimmed.starts_with('{') || (self.parse_arrays && trimmed.starts_with('['));

        if looks_like_json {
            match serde_json::from_str(trimmed) {
                Ok(value) => Ok(value),
                Err(_) if self.accept_raw_text => Ok(Value::String(body.to_string())),
                Err(e) => Err(RpcError::Decode(format!("Invalid JSON body: {}", e))),
            }
        } else if self.accept_raw_text {
            Ok(Value::String(body.to_string()))
        } else {
            Err(RpcError::Decode(format!(
                "Expected a JSON object, got: {}",
                truncate(trimmed, 120)
            )))
        }
    }
}

/// Truthiness of a JSON value: `null`, `false`, `0` and `""` are falsy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Return the `error` field of a decoded response if it is truthy.
pub fn remote_error(response: &Value) -> Option<&Value> {
    response.get("error").filter(|error| is_truthy(error))
}

/// Fail with `RpcError::Remote` when the response carries a truthy `error`.
pub fn check_response(response: Value) -> Result<Value> {
    match remote_error(&response) {
        Some(error) => Err(RpcError::Remote(error.clone())),
        None => Ok(response),
    }
}

/// Extract the value handed to the caller.
///
/// Envelope objects yield `result`, or `{}` when it is absent or `null`.
/// Bare values (arrays, scalars, raw text) are returned as-is.
pub fn unwrap_result(response: Value) -> Value {
    match response {
        Value::Object(mut map) => match map.remove("result") {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(result) => result,
        },
        other => other,
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
