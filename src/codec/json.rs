//! JSON codec using `serde_json`.
//!
//! Outgoing messages are serialized compactly and wrapped in a
//! `Content-Length` frame. Incoming bodies are decoded in two steps: first
//! just far enough to find the `method` (the [`Envelope`]), then into the
//! method's typed shape once the dispatcher knows which one to use.
//!
//! # Example
//!
//! ```
//! use http_lsp::codec::JsonCodec;
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Example {
//!     testing: bool,
//! }
//!
//! let framed = JsonCodec::encode(&Example { testing: true }).unwrap();
//! assert_eq!(&framed[..], b"Content-Length: 16\r\n\r\n{\"testing\":true}");
//! ```

use bytes::Bytes;
use serde_json::{Map, Value};

use crate::error::{LspError, Result};
use crate::protocol::build_frame;

/// Minimal decoded view of an incoming message, used only to route it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    /// Method name, empty when the message has none (e.g. a response).
    pub method: String,
    /// Whether the message carries a non-null `id`.
    pub has_id: bool,
    /// The unchanged body bytes, kept for typed decoding.
    pub body: Bytes,
}

impl Envelope {
    /// Whether the message carried a method at all.
    #[inline]
    pub fn has_method(&self) -> bool {
        !self.method.is_empty()
    }
}

/// JSON codec for LSP messages.
pub struct JsonCodec;

impl JsonCodec {
    /// Serialize a message and frame it.
    ///
    /// # Errors
    ///
    /// Returns [`LspError::Encode`] if the value cannot be represented as JSON.
    pub fn encode<T: serde::Serialize>(message: &T) -> Result<Bytes> {
        let body = serde_json::to_vec(message).map_err(LspError::Encode)?;
        Ok(build_frame(&body))
    }

    /// Extract the method name from a frame body.
    ///
    /// The `method` key is matched exactly first and then ignoring ASCII
    /// case, so `{"Method":"hi"}` routes as `hi`.
    ///
    /// # Errors
    ///
    /// Returns [`LspError::MalformedBody`] if the body is not a JSON object or
    /// its method is not a string. A missing method is not an error.
    pub fn decode_envelope(body: Bytes) -> Result<Envelope> {
        let object: Map<String, Value> = serde_json::from_slice(&body)
            .map_err(|e| LspError::MalformedBody(e.to_string()))?;

        let method = match find_method(&object) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(method)) => method.clone(),
            Some(other) => {
                return Err(LspError::MalformedBody(format!(
                    "method must be a string, got {other}"
                )))
            }
        };

        let has_id = object.get("id").is_some_and(|id| !id.is_null());

        Ok(Envelope {
            method,
            has_id,
            body,
        })
    }

    /// Decode a body into the typed shape registered for `method`.
    ///
    /// # Errors
    ///
    /// Returns [`LspError::Decode`] naming the method on failure.
    pub fn decode<T: serde::de::DeserializeOwned>(method: &str, body: &[u8]) -> Result<T> {
        serde_json::from_slice(body).map_err(|source| LspError::Decode {
            method: method.to_string(),
            source,
        })
    }
}

fn find_method(object: &Map<String, Value>) -> Option<&Value> {
    object.get("method").or_else(|| {
        object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case("method"))
            .map(|(_, value)| value)
    })
}
