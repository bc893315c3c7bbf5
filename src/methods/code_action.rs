//! `textDocument/codeAction`: a single placeholder.

use crate::lsp::{CodeAction, CodeActionParams, Request};

/// Title of the placeholder action.
pub const PLACEHOLDER_TITLE: &str = "TODO implement";

/// Handle `textDocument/codeAction`.
pub fn code_action(_request: Request<CodeActionParams>) -> CodeAction {
    CodeAction {
        title: PLACEHOLDER_TITLE.to_string(),
        edit: None,
        command: None,
    }
}
