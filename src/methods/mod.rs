//! Built-in handler set.
//!
//! One handler per supported method. Handlers are pure functions over the
//! decoded request; any static data they answer with lives in constant
//! tables in their own module.

mod code_action;
mod completion;
mod definition;
mod document;
mod hover;
mod initialize;

pub use code_action::{code_action, PLACEHOLDER_TITLE};
pub use completion::{completion, COMPLETION_VOCABULARY};
pub use definition::definition;
pub use document::{demo_diagnostics, did_change, did_open};
pub use hover::{hover, HOVER_TEXT};
pub use initialize::{initialize, server_capabilities};

use crate::config::ServerConfig;
use crate::handler::HandlerRegistry;
use crate::lsp::{
    DidChangeTextDocumentParams, InitializeParams, Notification, Request, ServerInfo,
};

/// `initialize` request.
pub const INITIALIZE: &str = "initialize";
/// `textDocument/didOpen` notification.
pub const DID_OPEN: &str = "textDocument/didOpen";
/// `textDocument/didChange` notification.
pub const DID_CHANGE: &str = "textDocument/didChange";
/// `textDocument/hover` request.
pub const HOVER: &str = "textDocument/hover";
/// `textDocument/definition` request.
pub const DEFINITION: &str = "textDocument/definition";
/// `textDocument/codeAction` request.
pub const CODE_ACTION: &str = "textDocument/codeAction";
/// `textDocument/completion` request.
pub const COMPLETION: &str = "textDocument/completion";

/// Register every built-in handler.
pub fn register_defaults(registry: &mut HandlerRegistry, config: &ServerConfig) {
    let server_info = ServerInfo {
        name: config.server_name.clone(),
        version: config.server_version.clone(),
    };
    registry.register_request(INITIALIZE, move |request: Request<InitializeParams>| {
        initialize(&server_info, request)
    });

    registry.register_notification(DID_OPEN, did_open);

    let publish = config.publish_diagnostics_on_change;
    registry.register_notification_with_reply(
        DID_CHANGE,
        move |notification: Notification<DidChangeTextDocumentParams>| {
            did_change(notification, publish)
        },
    );

    registry.register_request(HOVER, hover);
    registry.register_request(DEFINITION, definition);
    registry.register_request(CODE_ACTION, code_action);
    registry.register_request(COMPLETION, completion);
}
