//! Codec module - serialization/deserialization for message bodies.
//!
//! - [`JsonCodec`] - JSON using `serde_json`, framed with `Content-Length`
//! - [`Envelope`] - method name plus raw body, used for routing
//!
//! # Design
//!
//! Codecs are implemented as marker structs with static methods rather than trait objects.
//! Typed decoding is deferred until the dispatcher has picked a handler, so
//! routing never parses more than the `method` field's object.
//!
//! # Example
//!
//! ```
//! use http_lsp::codec::JsonCodec;
//! use http_lsp::protocol::Frame;
//!
//! let framed = JsonCodec::encode(&serde_json::json!({"jsonrpc": "2.0", "method": "exit"})).unwrap();
//! let frame = Frame::from_wire(framed).unwrap();
//! let envelope = JsonCodec::decode_envelope(frame.body_bytes()).unwrap();
//! assert_eq!(envelope.method, "exit");
//! ```

mod json;

pub use json::{Envelope, JsonCodec};
