//! Error types for http-lsp.

use thiserror::Error;

/// Main error type for transport and dispatch.
#[derive(Debug, Error)]
pub enum LspError {
    /// I/O error on the input or output stream.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Header is missing `Content-Length` or its value is not a decimal integer.
    #[error("Malformed header: {0}")]
    MalformedHeader(String),

    /// Declared content length exceeds the configured maximum.
    #[error("Content length {length} exceeds maximum {max}")]
    ContentTooLarge {
        /// Declared length.
        length: usize,
        /// Configured maximum.
        max: usize,
    },

    /// Frame body is not a JSON object with a usable `method`.
    #[error("Malformed body: {0}")]
    MalformedBody(String),

    /// Body could not be decoded into the method's typed shape.
    #[error("Failed to decode {method}: {source}")]
    Decode {
        /// Method whose params failed to decode.
        method: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },

    /// Outgoing message could not be serialized.
    #[error("Encode error: {0}")]
    Encode(#[source] serde_json::Error),
}

impl LspError {
    /// Whether the error can be survived by dropping the offending message.
    ///
    /// Only typed decode failures qualify; everything else means the stream
    /// is desynchronized or the output is broken.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, LspError::Decode { .. })
    }
}

/// Result type alias using LspError.
pub type Result<T> = std::result::Result<T, LspError>;
