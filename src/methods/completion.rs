//! `textDocument/completion`: a fixed HTTP vocabulary.

use crate::lsp::{CompletionItem, Request, TextDocumentPositionParams};

/// Completion entries as `(label, detail, documentation)`.
pub const COMPLETION_VOCABULARY: &[(&str, &str, &str)] = &[
    ("http://", "http", "unencrypted"),
    ("https://", "https", "encrypted"),
    ("POST ", "post method", "post method"),
    ("PUT ", "put method", "put method"),
    ("PATCH ", "patch method", "patch method"),
    ("GET ", "get method", "get method"),
    ("DELETE ", "delete method", "delete method"),
    ("User-Agent: ", "http header user agent", "http header user agent"),
    ("Accept-Language: ", "http header accept language", "http header accept language"),
    ("Accept-Encoding: ", "http header accept encoding", "http header accept encoding"),
    ("br", "accept-encoding value br", "accept-encoding value br"),
    ("gzip", "accept-encoding value gzip", "accept-encoding value gzip"),
    ("deflate", "accept-encoding value deflate", "accept-encoding value deflate"),
    ("Accept: ", "http header accept", "http header accept"),
    ("Content-Type: ", "http header content type", "http header content type"),
    ("application/x-www-form-urlencoded", "content type value", "content type value"),
    ("application/json", "accept or content type value", "accept or content type value"),
    ("text/html", "accept value", "accept value"),
    ("Referer: ", "http header referer", "http header referer"),
    ("Connection: ", "http header connection", "http header connection"),
    ("Cache-Control: ", "http header cache-control", "http header cache-control"),
    ("max-age=", "cache-control value", "unit is seconds"),
    ("Host: ", "http header host", "http header host"),
    ("HTTP/1.1", "protocol version 1", "protocol version version 1"),
    ("HTTP/2", "protocol version 2", "protocol version version 2"),
];

/// Handle `textDocument/completion`.
///
/// The list does not depend on the cursor position.
// TODO: filter by context (method line vs header name vs header value).
pub fn completion(_request: Request<TextDocumentPositionParams>) -> Vec<CompletionItem> {
    COMPLETION_VOCABULARY
        .iter()
        .map(|&(label, detail, documentation)| CompletionItem {
            label: label.to_string(),
            detail: detail.to_string(),
            documentation: documentation.to_string(),
        })
        .collect()
}
