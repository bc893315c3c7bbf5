//! `initialize` request and result.

use serde::{Deserialize, Serialize};

/// `textDocumentSync` kind: the client sends full document text on change.
pub const TEXT_DOCUMENT_SYNC_FULL: u8 = 1;

/// Params of `initialize`. Only the client info is read.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeParams {
    /// Client name and version, if the client sent them.
    #[serde(default)]
    pub client_info: Option<ClientInfo>,
}

/// Client name and version.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientInfo {
    /// Client name, e.g. `Neovim`.
    pub name: String,
    /// Client version.
    #[serde(default)]
    pub version: String,
}

/// Result of `initialize`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InitializeResult {
    /// Features this server supports.
    pub capabilities: ServerCapabilities,
    /// Server name and version.
    pub server_info: ServerInfo,
}

/// Features this server supports.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerCapabilities {
    /// Document sync kind.
    pub text_document_sync: u8,
    /// Hover support.
    pub hover_provider: bool,
    /// Go-to-definition support.
    pub definition_provider: bool,
    /// Code action support.
    pub code_action_provider: bool,
    /// Completion support; present means enabled.
    pub completion_provider: CompletionOptions,
}

/// Completion options. Empty: no trigger characters, no resolve.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompletionOptions {}

/// Server name and version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerInfo {
    /// Server name.
    pub name: String,
    /// Server version.
    pub version: String,
}
