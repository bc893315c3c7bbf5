//! Handler module - method lookup and typed dispatch.
//!
//! Provides:
//! - [`HandlerRegistry`] - maps method names to handlers
//! - [`TypedHandler`] - decodes the body into the handler's input type
//!
//! Handlers are plain synchronous functions: a request handler returns its
//! result payload, a notification handler returns nothing or one outgoing
//! message.
//!
//! # Example
//!
//! ```
//! use http_lsp::handler::HandlerRegistry;
//! use http_lsp::lsp::{Notification, Request};
//!
//! let mut registry = HandlerRegistry::new();
//!
//! // Request: the return value becomes the response result
//! registry.register_request("echo", |request: Request<String>| request.params);
//!
//! // Notification: no reply
//! registry.register_notification("ping", |_: Notification<serde_json::Value>| {});
//!
//! assert_eq!(registry.methods(), vec!["echo", "ping"]);
//! ```

mod registry;

pub use registry::{Dispatch, Handler, HandlerRegistry, MethodKind, TypedHandler};
