//! Frame buffer for accumulating partial reads.
//!
//! Uses `bytes::BytesMut` for zero-copy buffer management.
//! Implements a state machine for handling fragmented frames:
//! - `WaitingForHeader`: No `\r\n\r\n` seen yet
//! - `WaitingForBody`: Header parsed, need the rest of the body
//!
//! Header bytes stay in the buffer until the whole frame has arrived, so a
//! frame is never partially consumed.
//!
//! # Example
//!
//! ```
//! use http_lsp::protocol::{build_frame, FrameBuffer};
//!
//! let mut buffer = FrameBuffer::new();
//! let wire = build_frame(br#"{"method":"initialized"}"#);
//!
//! // Data arrives in chunks from stdin
//! buffer.extend(&wire[..10]);
//! assert!(buffer.next_frame().unwrap().is_none());
//!
//! buffer.extend(&wire[10..]);
//! let frame = buffer.next_frame().unwrap().unwrap();
//! assert_eq!(frame.body(), br#"{"method":"initialized"}"#);
//! ```

use bytes::BytesMut;

use super::wire_format::{parse_header, FrameBounds, DEFAULT_MAX_CONTENT_LENGTH};
use super::Frame;
use crate::error::Result;

/// State machine for frame parsing.
#[derive(Debug, Clone, Copy)]
enum State {
    /// Waiting for a complete header.
    WaitingForHeader,
    /// Header parsed, waiting for body bytes.
    WaitingForBody(FrameBounds),
}

/// Buffer for accumulating incoming bytes and extracting complete frames.
///
/// Uses a state machine to avoid rescanning a header that has already
/// been parsed. All data is stored in a single `BytesMut` buffer.
#[derive(Debug)]
pub struct FrameBuffer {
    /// Accumulated, unconsumed bytes from stream reads.
    buffer: BytesMut,
    /// Current parsing state.
    state: State,
    /// Maximum allowed body size.
    max_content_length: usize,
}

impl FrameBuffer {
    /// Create a new frame buffer with default settings.
    ///
    /// Default capacity: 64KB, max body: 64MB.
    pub fn new() -> Self {
        Self::with_capacity_and_max_content(64 * 1024, DEFAULT_MAX_CONTENT_LENGTH)
    }

    /// Create a new frame buffer with custom max body size.
    pub fn with_max_content(max_content_length: usize) -> Self {
        Self::with_capacity_and_max_content(64 * 1024, max_content_length)
    }

    /// Create a new frame buffer with custom capacity and max body size.
    pub fn with_capacity_and_max_content(capacity: usize, max_content_length: usize) -> Self {
        Self {
            buffer: BytesMut::with_capacity(capacity),
            state: State::WaitingForHeader,
            max_content_length,
        }
    }

    /// Append data to the buffer without extracting frames.
    pub fn extend(&mut self, data: &[u8]) {
        self.buffer.extend_from_slice(data);
    }

    /// Push data into the buffer and extract all complete frames.
    ///
    /// Convenience over [`extend`](Self::extend) followed by repeated
    /// [`next_frame`](Self::next_frame). Partial data stays buffered for
    /// the next push.
    ///
    /// # Errors
    ///
    /// Returns error on a malformed header or an oversized body.
    pub fn push(&mut self, data: &[u8]) -> Result<Vec<Frame>> {
        self.extend(data);

        let mut frames = Vec::new();
        while let Some(frame) = self.next_frame()? {
            frames.push(frame);
        }

        Ok(frames)
    }

    /// Try to extract a single frame from the front of the buffer.
    ///
    /// Returns:
    /// - `Ok(Some(frame))` if a complete frame was extracted
    /// - `Ok(None)` if more data is needed; the buffer is left untouched
    /// - `Err(...)` if the header is malformed or the body is too large
    pub fn next_frame(&mut self) -> Result<Option<Frame>> {
        let bounds = match self.state {
            State::WaitingForHeader => match parse_header(&self.buffer, self.max_content_length)? {
                Some(bounds) => bounds,
                None => return Ok(None),
            },
            State::WaitingForBody(bounds) => bounds,
        };

        if self.buffer.len() < bounds.total_len() {
            self.state = State::WaitingForBody(bounds);
            return Ok(None);
        }

        let bytes = self.buffer.split_to(bounds.total_len()).freeze();
        self.state = State::WaitingForHeader;

        Ok(Some(Frame::new(bounds, bytes)))
    }

    /// Get the number of buffered bytes.
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    /// Check if the buffer is empty.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Clear the buffer and reset state.
    pub fn clear(&mut self) {
        self.buffer.clear();
        self.state = State::WaitingForHeader;
    }

    /// Get the current state for debugging.
    #[cfg(test)]
    fn state_name(&self) -> &'static str {
        match &self.state {
            State::WaitingForHeader => "WaitingForHeader",
            State::WaitingForBody(_) => "WaitingForBody",
        }
    }
}

impl Default for FrameBuffer {
    fn default() -> Self {
        Self::new()
    }
}
