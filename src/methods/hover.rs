//! `textDocument/hover`: static text.

use crate::lsp::{Hover, Request, TextDocumentPositionParams};

/// Text returned for every hover.
pub const HOVER_TEXT: &str = "hello from lsp";

/// Handle `textDocument/hover`.
pub fn hover(_request: Request<TextDocumentPositionParams>) -> Hover {
    Hover {
        contents: HOVER_TEXT.to_string(),
    }
}
