//! JSON-RPC 2.0 envelopes.
//!
//! Typed wrappers for the three message kinds LSP uses. `P` is the
//! method-specific params type, `R` the result type.
//!
//! # Example
//!
//! ```
//! use http_lsp::lsp::{RequestId, Response};
//!
//! let response = Response::ok(RequestId::Number(1), "hello");
//! let json = serde_json::to_string(&response).unwrap();
//! assert_eq!(json, r#"{"jsonrpc":"2.0","id":1,"result":"hello"}"#);
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// JSON-RPC protocol version tag.
pub const JSONRPC_VERSION: &str = "2.0";

fn jsonrpc_version() -> String {
    JSONRPC_VERSION.to_string()
}

/// Request identifier.
///
/// Clients send numbers in practice; strings are legal JSON-RPC.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RequestId {
    /// Numeric id.
    Number(i64),
    /// String id.
    String(String),
}

impl fmt::Display for RequestId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RequestId::Number(n) => write!(f, "{n}"),
            RequestId::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl From<i64> for RequestId {
    fn from(n: i64) -> Self {
        RequestId::Number(n)
    }
}

/// A request: expects exactly one response with the same id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Request<P> {
    /// Protocol version, always `"2.0"`.
    #[serde(default = "jsonrpc_version")]
    pub jsonrpc: String,
    /// Identifier echoed by the response.
    pub id: RequestId,
    /// Method name. Routing reads it from the envelope, not from here.
    #[serde(default)]
    pub method: String,
    /// Method-specific parameters.
    pub params: P,
}

impl<P> Request<P> {
    /// Create a new request.
    pub fn new(id: impl Into<RequestId>, method: &str, params: P) -> Self {
        Self {
            jsonrpc: jsonrpc_version(),
            id: id.into(),
            method: method.to_string(),
            params,
        }
    }
}

/// A notification: no id, never answered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification<P> {
    /// Protocol version, always `"2.0"`.
    #[serde(default = "jsonrpc_version")]
    pub jsonrpc: String,
    /// Method name. Routing reads it from the envelope, not from here.
    #[serde(default)]
    pub method: String,
    /// Method-specific parameters.
    pub params: P,
}

impl<P> Notification<P> {
    /// Create a new notification.
    pub fn new(method: &str, params: P) -> Self {
        Self {
            jsonrpc: jsonrpc_version(),
            method: method.to_string(),
            params,
        }
    }
}

/// Error object carried by a failed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseError {
    /// JSON-RPC error code.
    pub code: i64,
    /// Human-readable message.
    pub message: String,
    /// Optional extra data.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// A response to a [`Request`].
///
/// Exactly one of `result` / `error` is set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response<R> {
    /// Protocol version, always `"2.0"`.
    pub jsonrpc: String,
    /// Id of the originating request; `None` only when it could not be read.
    pub id: Option<RequestId>,
    /// Successful result.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<R>,
    /// Failure details.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<ResponseError>,
}

impl<R> Response<R> {
    /// Successful response.
    pub fn ok(id: RequestId, result: R) -> Self {
        Self {
            jsonrpc: jsonrpc_version(),
            id: Some(id),
            result: Some(result),
            error: None,
        }
    }

    /// Failed response.
    pub fn err(id: Option<RequestId>, code: i64, message: impl Into<String>) -> Self {
        Self {
            jsonrpc: jsonrpc_version(),
            id,
            result: None,
            error: Some(ResponseError {
                code,
                message: message.into(),
                data: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_decodes_numeric_id() {
        let request: Request<serde_json::Value> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": 7,
            "method": "textDocument/hover",
            "params": {}
        }))
        .unwrap();

        assert_eq!(request.id, RequestId::Number(7));
        assert_eq!(request.method, "textDocument/hover");
    }

    #[test]
    fn test_request_decodes_string_id() {
        let request: Request<()> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "id": "abc",
            "method": "shutdown",
            "params": null
        }))
        .unwrap();

        assert_eq!(request.id, RequestId::String("abc".to_string()));
        assert_eq!(request.id.to_string(), "\"abc\"");
    }

    #[test]
    fn test_request_without_id_fails() {
        let result: Result<Request<()>, _> = serde_json::from_value(json!({
            "jsonrpc": "2.0",
            "method": "textDocument/didOpen",
            "params": null
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_notification_serializes_without_id() {
        let note = Notification::new("window/logMessage", json!({"message": "hi"}));
        let value = serde_json::to_value(&note).unwrap();

        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "method": "window/logMessage", "params": {"message": "hi"}})
        );
    }

    #[test]
    fn test_response_ok_omits_error() {
        let response = Response::ok(RequestId::Number(3), json!([1, 2]));
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value, json!({"jsonrpc": "2.0", "id": 3, "result": [1, 2]}));
    }

    #[test]
    fn test_response_err_omits_result() {
        let response: Response<()> = Response::err(Some(RequestId::Number(4)), -32601, "nope");
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(
            value,
            json!({"jsonrpc": "2.0", "id": 4, "error": {"code": -32601, "message": "nope"}})
        );
    }
}
