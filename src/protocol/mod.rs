//! Protocol module - wire format, framing, and frame types.
//!
//! This module implements the `Content-Length` framing used by LSP:
//! - Header encoding/parsing
//! - Frame buffer for accumulating partial reads
//! - Frame struct with body accessors

mod frame;
mod frame_buffer;
mod wire_format;

pub use frame::{build_frame, Frame};
pub use frame_buffer::FrameBuffer;
pub use wire_format::{
    encode_header, parse_content_length, parse_header, split_frame, FrameBounds,
    CONTENT_LENGTH_PREFIX, DEFAULT_MAX_CONTENT_LENGTH, HEADER_SEPARATOR, MAX_HEADER_LEN,
};
