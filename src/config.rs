//! Server configuration.
//!
//! Everything has a fixed default; the binary takes no flags and reads no
//! environment variables. The only build-time switch is the
//! `diagnostics-on-change` cargo feature, which flips the default of
//! [`ServerConfig::publish_diagnostics_on_change`].

use std::path::PathBuf;

use crate::protocol::DEFAULT_MAX_CONTENT_LENGTH;

/// Default log file location.
pub const DEFAULT_LOG_PATH: &str = "/tmp/nvim-http-log.txt";

/// Default log filter directive.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Default server name reported to the client.
pub const DEFAULT_SERVER_NAME: &str = "nvim_http";

/// Default stream read size.
pub const DEFAULT_READ_BUFFER_SIZE: usize = 64 * 1024;

/// What to do when a message body does not match its method's shape.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DecodeFailurePolicy {
    /// Stop the loop and return the error.
    #[default]
    Terminate,
    /// Log the error, drop the message without replying, keep going.
    Skip,
}

/// Configuration for the server loop, handlers and logging.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Log file, truncated at startup.
    pub log_path: PathBuf,
    /// `tracing_subscriber::EnvFilter` directive.
    pub log_filter: String,
    /// Name reported in `serverInfo`.
    pub server_name: String,
    /// Version reported in `serverInfo`.
    pub server_version: String,
    /// Emit demo diagnostics on `textDocument/didChange`.
    pub publish_diagnostics_on_change: bool,
    /// Reaction to a typed decode failure.
    pub decode_failure: DecodeFailurePolicy,
    /// Largest accepted `Content-Length`.
    pub max_content_length: usize,
    /// Bytes requested per read from the input stream.
    pub read_buffer_size: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            log_filter: DEFAULT_LOG_FILTER.to_string(),
            server_name: DEFAULT_SERVER_NAME.to_string(),
            server_version: env!("CARGO_PKG_VERSION").to_string(),
            publish_diagnostics_on_change: cfg!(feature = "diagnostics-on-change"),
            decode_failure: DecodeFailurePolicy::default(),
            max_content_length: DEFAULT_MAX_CONTENT_LENGTH,
            read_buffer_size: DEFAULT_READ_BUFFER_SIZE,
        }
    }
}
