//! Server builder and dispatch loop.
//!
//! The [`ServerBuilder`] provides a fluent API for configuring the server
//! and registering handlers. The [`Server`] runs the loop:
//! 1. Read bytes from the input stream into the frame buffer
//! 2. Split off one complete frame at a time
//! 3. Decode the envelope and route by method name
//! 4. Write the handler's reply, if any, before reading on
//!
//! The loop is sequential: one frame is fully handled and its reply fully
//! written before the next frame is looked at. End of input ends the loop.
//!
//! # Example
//!
//! ```no_run
//! use http_lsp::Server;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let server = Server::builder().with_default_handlers().build();
//!
//!     server.serve(tokio::io::stdin(), tokio::io::stdout()).await?;
//!     Ok(())
//! }
//! ```

use serde::de::DeserializeOwned;
use serde::Serialize;
use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite};

use crate::codec::JsonCodec;
use crate::config::{DecodeFailurePolicy, ServerConfig};
use crate::error::{LspError, Result};
use crate::handler::{Dispatch, HandlerRegistry};
use crate::lsp::{Notification, Request};
use crate::methods;
use crate::protocol::{Frame, FrameBuffer};
use crate::writer::FrameWriter;

/// Builder for configuring and creating a server.
pub struct ServerBuilder {
    registry: HandlerRegistry,
    config: ServerConfig,
    default_handlers: bool,
}

impl ServerBuilder {
    /// Create a new server builder with default configuration and no handlers.
    pub fn new() -> Self {
        Self {
            registry: HandlerRegistry::new(),
            config: ServerConfig::default(),
            default_handlers: false,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: ServerConfig) -> Self {
        self.config = config;
        self
    }

    /// Install the built-in handler set when building.
    ///
    /// Handlers registered explicitly for the same method win.
    pub fn with_default_handlers(mut self) -> Self {
        self.default_handlers = true;
        self
    }

    /// Register a request handler. Its return value becomes the result.
    pub fn handle_request<P, R, F>(mut self, method: &str, handler: F) -> Self
    where
        P: DeserializeOwned + 'static,
        R: Serialize + 'static,
        F: Fn(Request<P>) -> R + Send + Sync + 'static,
    {
        self.registry.register_request(method, handler);
        self
    }

    /// Register a notification handler that never replies.
    pub fn handle_notification<P, F>(mut self, method: &str, handler: F) -> Self
    where
        P: DeserializeOwned + 'static,
        F: Fn(Notification<P>) + Send + Sync + 'static,
    {
        self.registry.register_notification(method, handler);
        self
    }

    /// Register a notification handler that may emit one message.
    pub fn handle_notification_with_reply<P, O, F>(mut self, method: &str, handler: F) -> Self
    where
        P: DeserializeOwned + 'static,
        O: Serialize + 'static,
        F: Fn(Notification<P>) -> Option<O> + Send + Sync + 'static,
    {
        self.registry.register_notification_with_reply(method, handler);
        self
    }

    /// Publish demo diagnostics on `textDocument/didChange`.
    pub fn publish_diagnostics_on_change(mut self, enabled: bool) -> Self {
        self.config.publish_diagnostics_on_change = enabled;
        self
    }

    /// Set the reaction to a message whose body does not fit its method.
    ///
    /// Default: [`DecodeFailurePolicy::Terminate`]
    pub fn decode_failure(mut self, policy: DecodeFailurePolicy) -> Self {
        self.config.decode_failure = policy;
        self
    }

    /// Set the largest accepted `Content-Length`.
    ///
    /// Default: 64 MiB
    pub fn max_content_length(mut self, limit: usize) -> Self {
        self.config.max_content_length = limit;
        self
    }

    /// Set how many bytes are requested per read.
    ///
    /// Default: 64 KiB
    pub fn read_buffer_size(mut self, size: usize) -> Self {
        self.config.read_buffer_size = size.max(1);
        self
    }

    /// Build the server.
    pub fn build(self) -> Server {
        let mut registry = self.registry;

        if self.default_handlers {
            let mut defaults = HandlerRegistry::new();
            methods::register_defaults(&mut defaults, &self.config);
            defaults.absorb(registry);
            registry = defaults;
        }

        Server {
            registry,
            config: self.config,
        }
    }
}

impl Default for ServerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A configured server, ready to serve one client connection.
pub struct Server {
    /// Handlers by method name.
    registry: HandlerRegistry,
    /// Loop and handler configuration.
    config: ServerConfig,
}

impl Server {
    /// Create a new server builder.
    pub fn builder() -> ServerBuilder {
        ServerBuilder::new()
    }

    /// The active configuration.
    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    /// The handler registry.
    pub fn registry(&self) -> &HandlerRegistry {
        &self.registry
    }

    /// Serve one client until its input stream closes.
    ///
    /// Returns `Ok(())` on end of input. Returns an error on a framing
    /// failure, an envelope decode failure, an encode failure, an I/O error,
    /// or a typed decode failure under [`DecodeFailurePolicy::Terminate`].
    pub async fn serve<R, W>(&self, mut reader: R, writer: W) -> Result<()>
    where
        R: AsyncRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut writer = FrameWriter::new(writer);
        let mut frame_buffer = FrameBuffer::with_max_content(self.config.max_content_length);
        let mut buf = vec![0u8; self.config.read_buffer_size.max(1)];

        loop {
            let n = reader.read(&mut buf).await?;
            if n == 0 {
                if !frame_buffer.is_empty() {
                    tracing::warn!(
                        "Input closed with {} unconsumed bytes",
                        frame_buffer.len()
                    );
                }
                tracing::info!(
                    frames_written = writer.frames_written(),
                    "Input closed, shutting down"
                );
                return Ok(());
            }

            frame_buffer.extend(&buf[..n]);

            while let Some(frame) = frame_buffer.next_frame()? {
                self.handle_frame(frame, &mut writer).await?;
            }
        }
    }

    fn can_skip(&self, error: &LspError) -> bool {
        error.is_recoverable() && self.config.decode_failure == DecodeFailurePolicy::Skip
    }

    /// Route one frame and write its reply, if any.
    async fn handle_frame<W>(&self, frame: Frame, writer: &mut FrameWriter<W>) -> Result<()>
    where
        W: AsyncWrite + Unpin,
    {
        let envelope = JsonCodec::decode_envelope(frame.body_bytes())?;
        tracing::info!("received message with method: {}", envelope.method);

        let dispatch = match self.registry.dispatch(&envelope) {
            Ok(dispatch) => dispatch,
            Err(e) if self.can_skip(&e) => {
                tracing::error!("Dropping message: {}", e);
                return Ok(());
            }
            Err(e) => return Err(e),
        };

        match dispatch {
            Dispatch::Reply(bytes) => writer.write_frame(&bytes).await,
            Dispatch::NoReply => Ok(()),
            Dispatch::Unhandled if envelope.has_method() => {
                tracing::info!("Ignoring unhandled method: {}", envelope.method);
                Ok(())
            }
            Dispatch::Unhandled => {
                tracing::info!("Ignoring message without method");
                Ok(())
            }
        }
    }
}

/// Report a fatal loop error with as much context as the error carries.
pub fn log_fatal(error: &LspError) {
    match error {
        LspError::Decode { method, source } => {
            tracing::error!(method = %method, "Fatal decode error: {}", source)
        }
        other => tracing::error!("Fatal error: {}", other),
    }
}
