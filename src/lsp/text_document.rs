//! `textDocument/*` params and results.

use serde::{Deserialize, Serialize};

use super::types::{
    Command, Range, TextDocumentIdentifier, TextDocumentItem, VersionedTextDocumentIdentifier,
    WorkspaceEdit,
};

/// Params of `textDocument/didOpen`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidOpenTextDocumentParams {
    /// The opened document.
    pub text_document: TextDocumentItem,
}

/// Params of `textDocument/didChange`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DidChangeTextDocumentParams {
    /// The changed document and its new version.
    pub text_document: VersionedTextDocumentIdentifier,
    /// Changes; with full sync this is the whole new text.
    #[serde(default)]
    pub content_changes: Vec<TextDocumentContentChangeEvent>,
}

/// One content change. Without a range it replaces the whole document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextDocumentContentChangeEvent {
    /// New text.
    pub text: String,
}

/// Result of `textDocument/hover`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hover {
    /// Plain text contents.
    pub contents: String,
}

/// Params of `textDocument/codeAction`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeActionParams {
    /// Target document.
    pub text_document: TextDocumentIdentifier,
    /// Selected range.
    pub range: Range,
    /// Surrounding context.
    #[serde(default)]
    pub context: CodeActionContext,
}

/// Code action context. Diagnostics and filters are ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeActionContext {}

/// A code action offered to the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CodeAction {
    /// Display title.
    pub title: String,
    /// Edit applied when chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub edit: Option<WorkspaceEdit>,
    /// Command run when chosen.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command: Option<Command>,
}

/// One completion suggestion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionItem {
    /// Inserted text and label.
    pub label: String,
    /// Short detail shown next to the label.
    pub detail: String,
    /// Longer description.
    pub documentation: String,
}
