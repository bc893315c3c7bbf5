//! Frame struct with typed accessors.
//!
//! Represents one complete message as it appeared on the wire: header,
//! separator and body. Uses `bytes::Bytes` so the body can be handed to the
//! codec without copying.
//!
//! # Example
//!
//! ```
//! use http_lsp::protocol::{build_frame, Frame};
//!
//! let bytes = build_frame(br#"{"method":"initialize"}"#);
//! let frame = Frame::from_wire(bytes).unwrap();
//!
//! assert_eq!(frame.content_length(), 23);
//! assert_eq!(frame.body(), br#"{"method":"initialize"}"#);
//! ```

use bytes::{BufMut, Bytes, BytesMut};

use super::wire_format::{encode_header, split_frame, FrameBounds};
use crate::error::{LspError, Result};

/// A complete protocol frame.
#[derive(Debug, Clone)]
pub struct Frame {
    /// Header and body positions inside `bytes`.
    bounds: FrameBounds,
    /// The whole frame, header included.
    bytes: Bytes,
}

impl Frame {
    /// Create a frame from bytes already known to hold exactly one frame.
    pub(crate) fn new(bounds: FrameBounds, bytes: Bytes) -> Self {
        debug_assert_eq!(bounds.total_len(), bytes.len());
        Self { bounds, bytes }
    }

    /// Parse a buffer holding exactly one frame.
    ///
    /// Fails if the buffer holds an incomplete frame or trailing bytes.
    pub fn from_wire(bytes: Bytes) -> Result<Self> {
        let bounds = split_frame(&bytes, usize::MAX)?
            .ok_or_else(|| LspError::MalformedHeader("incomplete frame".to_string()))?;
        if bounds.total_len() != bytes.len() {
            return Err(LspError::MalformedHeader(format!(
                "{} trailing bytes after frame",
                bytes.len() - bounds.total_len()
            )));
        }
        Ok(Self::new(bounds, bytes))
    }

    /// Get the header bytes (separator excluded).
    #[inline]
    pub fn header(&self) -> &[u8] {
        &self.bytes[..self.bounds.header_len]
    }

    /// Get a reference to the body bytes.
    #[inline]
    pub fn body(&self) -> &[u8] {
        &self.bytes[self.bounds.body_start()..]
    }

    /// Get a clone of the body as Bytes (cheap, zero-copy).
    #[inline]
    pub fn body_bytes(&self) -> Bytes {
        self.bytes.slice(self.bounds.body_start()..)
    }

    /// Body length declared in the header.
    #[inline]
    pub fn content_length(&self) -> usize {
        self.bounds.content_length
    }

    /// Total frame length on the wire.
    #[inline]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// Always false; a frame has at least a header.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// The whole frame as it appeared on the wire.
    #[inline]
    pub fn as_bytes(&self) -> &Bytes {
        &self.bytes
    }
}

/// Build a complete frame (header + separator + body) as one buffer.
///
/// # Example
///
/// ```
/// use http_lsp::protocol::build_frame;
///
/// let bytes = build_frame(br#"{"testing":true}"#);
/// assert_eq!(&bytes[..], b"Content-Length: 16\r\n\r\n{\"testing\":true}");
/// ```
pub fn build_frame(body: &[u8]) -> Bytes {
    let header = encode_header(body.len());
    let mut buf = BytesMut::with_capacity(header.len() + body.len());
    buf.put_slice(header.as_bytes());
    buf.put_slice(body);
    buf.freeze()
}
