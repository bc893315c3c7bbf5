//! Output side of the transport.
//!
//! Replies are written one at a time, in the order their requests arrived.
//! Each frame is written in full and flushed before the dispatcher reads
//! the next one, so frames never interleave on the output stream.

use bytes::Bytes;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::Result;

/// Sequential frame writer over any async byte sink (stdout in production).
#[derive(Debug)]
pub struct FrameWriter<W> {
    /// Underlying stream.
    inner: W,
    /// Frames written so far.
    frames_written: u64,
    /// Bytes written so far.
    bytes_written: u64,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    /// Wrap an output stream.
    pub fn new(inner: W) -> Self {
        Self {
            inner,
            frames_written: 0,
            bytes_written: 0,
        }
    }

    /// Write one already-framed message and flush.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if the write or flush fails.
    pub async fn write_frame(&mut self, frame: &Bytes) -> Result<()> {
        self.inner.write_all(frame).await?;
        self.inner.flush().await?;

        self.frames_written += 1;
        self.bytes_written += frame.len() as u64;
        Ok(())
    }

    /// Number of frames written.
    #[inline]
    pub fn frames_written(&self) -> u64 {
        self.frames_written
    }

    /// Number of bytes written.
    #[inline]
    pub fn bytes_written(&self) -> u64 {
        self.bytes_written
    }

    /// Get a reference to the underlying stream.
    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    /// Unwrap the underlying stream.
    pub fn into_inner(self) -> W {
        self.inner
    }
}
