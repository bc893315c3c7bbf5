//! `initialize`: report capabilities and log who connected.

use crate::lsp::{
    CompletionOptions, InitializeParams, InitializeResult, Request, ServerCapabilities, ServerInfo,
    TEXT_DOCUMENT_SYNC_FULL,
};

/// Capabilities advertised to every client.
pub fn server_capabilities() -> ServerCapabilities {
    ServerCapabilities {
        text_document_sync: TEXT_DOCUMENT_SYNC_FULL,
        hover_provider: true,
        definition_provider: true,
        code_action_provider: true,
        completion_provider: CompletionOptions::default(),
    }
}

/// Handle `initialize`.
pub fn initialize(
    server_info: &ServerInfo,
    request: Request<InitializeParams>,
) -> InitializeResult {
    match &request.params.client_info {
        Some(client) => tracing::info!("connected to {} {}", client.name, client.version),
        None => tracing::info!("connected to unnamed client"),
    }

    InitializeResult {
        capabilities: server_capabilities(),
        server_info: server_info.clone(),
    }
}
