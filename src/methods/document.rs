//! Document lifecycle notifications.
//!
//! Nothing is stored: open and change are logged, and a change may be
//! answered with a fixed set of demo diagnostics.

use crate::lsp::{
    DidChangeTextDocumentParams, DidOpenTextDocumentParams, Diagnostic, DiagnosticSeverity,
    Notification, PublishDiagnosticsParams, Range, PUBLISH_DIAGNOSTICS,
};

/// Demo diagnostics as `(line, source)`; each spans characters 0..5.
const DEMO_DIAGNOSTICS: [(u32, &str); 2] = [(0, "me stuff"), (1, "me stuff 2")];

const DEMO_MESSAGE: &str = "you made a change";

/// Handle `textDocument/didOpen`.
pub fn did_open(notification: Notification<DidOpenTextDocumentParams>) {
    tracing::info!("Opened: {}", notification.params.text_document.uri);
}

/// Handle `textDocument/didChange`.
///
/// Returns a `textDocument/publishDiagnostics` notification for the same
/// document when `publish_diagnostics` is set.
pub fn did_change(
    notification: Notification<DidChangeTextDocumentParams>,
    publish_diagnostics: bool,
) -> Option<Notification<PublishDiagnosticsParams>> {
    let uri = notification.params.text_document.uri;
    tracing::info!("Changed: {}", uri);

    publish_diagnostics.then(|| {
        Notification::new(
            PUBLISH_DIAGNOSTICS,
            PublishDiagnosticsParams {
                uri,
                diagnostics: demo_diagnostics(),
            },
        )
    })
}

/// The fixed diagnostics published on change.
pub fn demo_diagnostics() -> Vec<Diagnostic> {
    DEMO_DIAGNOSTICS
        .iter()
        .map(|&(line, source)| Diagnostic {
            range: Range::on_line(line, 0, 5),
            severity: DiagnosticSeverity::Error,
            source: source.to_string(),
            message: DEMO_MESSAGE.to_string(),
        })
        .collect()
}
