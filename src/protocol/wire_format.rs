//! Wire format encoding and decoding.
//!
//! Every message on the wire is a header followed by a JSON body:
//! ```text
//! ┌─────────────────────────┬──────────┬──────────────────┐
//! │ Content-Length: <N>     │ \r\n\r\n │ body (N bytes)   │
//! │ ASCII, decimal N        │ 4 bytes  │ UTF-8 JSON       │
//! └─────────────────────────┴──────────┴──────────────────┘
//! ```
//!
//! `N` counts bytes, not characters. The next header starts right after
//! the last body byte. No other header fields are recognized.

use crate::error::{LspError, Result};

/// Separator between header and body.
pub const HEADER_SEPARATOR: &[u8; 4] = b"\r\n\r\n";

/// Literal prefix of the only header field.
pub const CONTENT_LENGTH_PREFIX: &str = "Content-Length: ";

/// Longest accepted header, separator excluded.
///
/// `Content-Length: ` plus the digits of any `usize` fits well inside it.
pub const MAX_HEADER_LEN: usize = 64;

/// Default maximum body size (64 MiB).
pub const DEFAULT_MAX_CONTENT_LENGTH: usize = 64 * 1024 * 1024;

/// Location of one complete frame at the start of a buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameBounds {
    /// Header length in bytes, separator excluded.
    pub header_len: usize,
    /// Body length declared by the header.
    pub content_length: usize,
}

impl FrameBounds {
    /// Offset of the first body byte.
    #[inline]
    pub fn body_start(&self) -> usize {
        self.header_len + HEADER_SEPARATOR.len()
    }

    /// Total frame length (header + separator + body).
    #[inline]
    pub fn total_len(&self) -> usize {
        self.body_start() + self.content_length
    }
}

/// Encode the header for a body of `content_length` bytes, separator included.
///
/// # Example
///
/// ```
/// use http_lsp::protocol::encode_header;
///
/// assert_eq!(encode_header(16), "Content-Length: 16\r\n\r\n");
/// ```
pub fn encode_header(content_length: usize) -> String {
    format!("{CONTENT_LENGTH_PREFIX}{content_length}\r\n\r\n")
}

/// Parse the declared body length out of a header (separator excluded).
pub fn parse_content_length(header: &[u8]) -> Result<usize> {
    let header = std::str::from_utf8(header)
        .map_err(|_| LspError::MalformedHeader("header is not ASCII".to_string()))?;

    let digits = header.strip_prefix(CONTENT_LENGTH_PREFIX).ok_or_else(|| {
        LspError::MalformedHeader(format!("expected `{CONTENT_LENGTH_PREFIX}<N>`, got {header:?}"))
    })?;

    digits
        .parse::<usize>()
        .map_err(|e| LspError::MalformedHeader(format!("invalid content length {digits:?}: {e}")))
}

/// Parse the header at the start of `data`.
///
/// Returns:
/// - `Ok(Some(bounds))` once the separator has arrived, whether or not the body has
/// - `Ok(None)` if the separator has not arrived yet
/// - `Err(...)` if the header is malformed, longer than [`MAX_HEADER_LEN`],
///   or declares more than `max_content_length` bytes
///
/// Only the first `MAX_HEADER_LEN + 4` bytes are ever scanned.
pub fn parse_header(data: &[u8], max_content_length: usize) -> Result<Option<FrameBounds>> {
    let Some(header_len) = find_separator(data) else {
        if data.len() >= MAX_HEADER_LEN + HEADER_SEPARATOR.len() {
            return Err(LspError::MalformedHeader(format!(
                "no header terminator within {MAX_HEADER_LEN} bytes"
            )));
        }
        return Ok(None);
    };

    let content_length = parse_content_length(&data[..header_len])?;
    if content_length > max_content_length {
        return Err(LspError::ContentTooLarge {
            length: content_length,
            max: max_content_length,
        });
    }

    Ok(Some(FrameBounds {
        header_len,
        content_length,
    }))
}

/// Find the first complete frame at the start of `data`.
///
/// Returns:
/// - `Ok(Some(bounds))` if a whole frame is present
/// - `Ok(None)` if more data is needed (separator or body bytes missing)
/// - `Err(...)` as for [`parse_header`]
///
/// Pure function: calling it again on the same input gives the same answer.
pub fn split_frame(data: &[u8], max_content_length: usize) -> Result<Option<FrameBounds>> {
    Ok(parse_header(data, max_content_length)?.filter(|bounds| data.len() >= bounds.total_len()))
}

/// Position of the first `\r\n\r\n` within the header window, if any.
#[inline]
fn find_separator(data: &[u8]) -> Option<usize> {
    let window = &data[..data.len().min(MAX_HEADER_LEN + HEADER_SEPARATOR.len())];
    window
        .windows(HEADER_SEPARATOR.len())
        .position(|candidate| candidate == HEADER_SEPARATOR)
}
