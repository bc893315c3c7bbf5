//! LSP message model.
//!
//! Only the subset of the protocol the built-in handlers use. Field names
//! follow the LSP JSON casing through `serde(rename_all = "camelCase")`.

mod diagnostics;
mod initialize;
mod message;
mod text_document;
mod types;

pub use diagnostics::{Diagnostic, DiagnosticSeverity, PublishDiagnosticsParams, PUBLISH_DIAGNOSTICS};
pub use initialize::{
    ClientInfo, CompletionOptions, InitializeParams, InitializeResult, ServerCapabilities,
    ServerInfo, TEXT_DOCUMENT_SYNC_FULL,
};
pub use message::{Notification, Request, RequestId, Response, ResponseError, JSONRPC_VERSION};
pub use text_document::{
    CodeAction, CodeActionContext, CodeActionParams, CompletionItem, DidChangeTextDocumentParams,
    DidOpenTextDocumentParams, Hover, TextDocumentContentChangeEvent,
};
pub use types::{
    Command, Location, Position, Range, TextDocumentIdentifier, TextDocumentItem,
    TextDocumentPositionParams, TextEdit, VersionedTextDocumentIdentifier, WorkspaceEdit,
};
