//! Handler registry for dispatching messages by method name.
//!
//! The registry maps method names to handlers. It is filled once at
//! startup and only read afterwards; lookup is an exact string match.
//!
//! # Example
//!
//! ```
//! use http_lsp::handler::{Dispatch, HandlerRegistry};
//! use http_lsp::codec::JsonCodec;
//! use http_lsp::lsp::Request;
//! use bytes::Bytes;
//!
//! let mut registry = HandlerRegistry::new();
//! registry.register_request("echo", |request: Request<String>| request.params);
//!
//! let body = Bytes::from_static(br#"{"jsonrpc":"2.0","id":1,"method":"echo","params":"hi"}"#);
//! let envelope = JsonCodec::decode_envelope(body).unwrap();
//!
//! match registry.dispatch(&envelope).unwrap() {
//!     Dispatch::Reply(bytes) => assert!(bytes.ends_with(br#""result":"hi"}"#)),
//!     other => panic!("unexpected {other:?}"),
//! }
//! ```

use std::collections::HashMap;
use std::marker::PhantomData;

use bytes::Bytes;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::codec::{Envelope, JsonCodec};
use crate::error::Result;
use crate::lsp::{Notification, Request, Response};

/// Trait for handler functions.
pub trait Handler: Send + Sync + 'static {
    /// Handle a message body, returning the framed reply, if any.
    fn call(&self, method: &str, body: &[u8]) -> Result<Option<Bytes>>;
}

/// Wrapper that decodes the body before calling the handler and encodes
/// whatever it returns.
pub struct TypedHandler<F, T, O>
where
    F: Fn(T) -> Option<O> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    O: Serialize + 'static,
{
    handler: F,
    _phantom: PhantomData<fn(T) -> O>,
}

impl<F, T, O> TypedHandler<F, T, O>
where
    F: Fn(T) -> Option<O> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    O: Serialize + 'static,
{
    /// Create a new typed handler.
    pub fn new(handler: F) -> Self {
        Self {
            handler,
            _phantom: PhantomData,
        }
    }
}

impl<F, T, O> Handler for TypedHandler<F, T, O>
where
    F: Fn(T) -> Option<O> + Send + Sync + 'static,
    T: DeserializeOwned + 'static,
    O: Serialize + 'static,
{
    fn call(&self, method: &str, body: &[u8]) -> Result<Option<Bytes>> {
        let parsed: T = JsonCodec::decode(method, body)?;

        match (self.handler)(parsed) {
            Some(outgoing) => JsonCodec::encode(&outgoing).map(Some),
            None => Ok(None),
        }
    }
}

/// Kind of message a method is registered as.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MethodKind {
    /// Has an id; always answered with a response.
    Request,
    /// No id; answered with nothing, or with a side notification.
    Notification,
}

/// Outcome of dispatching one message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Dispatch {
    /// Handler produced a framed message to write.
    Reply(Bytes),
    /// Handler ran and produced nothing.
    NoReply,
    /// No handler is registered for the method.
    Unhandled,
}

/// Entry for a registered method.
struct MethodEntry {
    /// The handler function.
    handler: Box<dyn Handler>,
    /// Request or notification.
    kind: MethodKind,
}

/// Registry mapping method names to handlers.
#[derive(Default)]
pub struct HandlerRegistry {
    /// Methods by name.
    methods: HashMap<String, MethodEntry>,
}

impl HandlerRegistry {
    /// Create a new empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a request handler.
    ///
    /// The handler receives the decoded request and returns the result
    /// payload; the registry wraps it in a response echoing the request id.
    /// Registering the same name twice replaces the earlier handler.
    pub fn register_request<P, R, F>(&mut self, method: &str, handler: F)
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(Request<P>) -> R + Send + Sync + 'static,
    {
        let typed = TypedHandler::new(move |request: Request<P>| {
            let id = request.id.clone();
            Some(Response::ok(id, handler(request)))
        });
        self.insert(method, MethodKind::Request, Box::new(typed));
    }

    /// Register a notification handler that never replies.
    pub fn register_notification<P, F>(&mut self, method: &str, handler: F)
    where
        P: DeserializeOwned + 'static,
        F: Fn(Notification<P>) + Send + Sync + 'static,
    {
        let typed = TypedHandler::new(move |notification: Notification<P>| -> Option<()> {
            handler(notification);
            None
        });
        self.insert(method, MethodKind::Notification, Box::new(typed));
    }

    /// Register a notification handler that may emit one outgoing message,
    /// such as a server-to-client notification.
    pub fn register_notification_with_reply<P, O, F>(&mut self, method: &str, handler: F)
    where
        P: DeserializeOwned + 'static,
        O: Serialize + 'static,
        F: Fn(Notification<P>) -> Option<O> + Send + Sync + 'static,
    {
        let typed = TypedHandler::new(handler);
        self.insert(method, MethodKind::Notification, Box::new(typed));
    }

    fn insert(&mut self, method: &str, kind: MethodKind, handler: Box<dyn Handler>) {
        if self
            .methods
            .insert(method.to_string(), MethodEntry { handler, kind })
            .is_some()
        {
            tracing::warn!(method, "Replacing previously registered handler");
        }
    }

    /// Move every handler from `other` into this registry.
    ///
    /// Handlers from `other` replace same-named ones already here.
    pub fn absorb(&mut self, other: HandlerRegistry) {
        self.methods.extend(other.methods);
    }

    /// Get a handler by method name.
    pub fn get_handler(&self, method: &str) -> Option<&dyn Handler> {
        self.methods.get(method).map(|e| e.handler.as_ref())
    }

    /// Get the kind a method was registered as.
    pub fn get_kind(&self, method: &str) -> Option<MethodKind> {
        self.methods.get(method).map(|e| e.kind)
    }

    /// Check whether a method has a handler.
    pub fn contains(&self, method: &str) -> bool {
        self.methods.contains_key(method)
    }

    /// Registered method names, sorted.
    pub fn methods(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.methods.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    /// Number of registered methods.
    pub fn len(&self) -> usize {
        self.methods.len()
    }

    /// Check if no method is registered.
    pub fn is_empty(&self) -> bool {
        self.methods.is_empty()
    }

    /// Dispatch a message to the handler registered for its method.
    ///
    /// Unknown methods are not an error: they yield [`Dispatch::Unhandled`].
    /// A request without an id is dropped with a warning, since no response
    /// could be addressed to it. A notification carrying an id is handled
    /// normally; the id is ignored.
    ///
    /// # Errors
    ///
    /// Returns the handler's decode or encode error.
    pub fn dispatch(&self, envelope: &Envelope) -> Result<Dispatch> {
        let Some(entry) = self.methods.get(&envelope.method) else {
            return Ok(Dispatch::Unhandled);
        };

        match (entry.kind, envelope.has_id) {
            (MethodKind::Request, false) => {
                tracing::warn!(method = %envelope.method, "Dropping request without id");
                return Ok(Dispatch::NoReply);
            }
            (MethodKind::Notification, true) => {
                tracing::warn!(
                    method = %envelope.method,
                    "Notification carries an id; ignoring it"
                );
            }
            _ => {}
        }

        Ok(match entry.handler.call(&envelope.method, &envelope.body)? {
            Some(bytes) => Dispatch::Reply(bytes),
            None => Dispatch::NoReply,
        })
    }
}
