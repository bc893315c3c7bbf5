//! # http-lsp
//!
//! A minimal language server for HTTP request files, speaking the Language
//! Server Protocol over stdin/stdout.
//!
//! ## Architecture
//!
//! - **Framing** ([`protocol`]): `Content-Length` headers delimit messages
//! - **Codec** ([`codec`]): JSON bodies, method extraction for routing
//! - **Dispatch** ([`server`], [`handler`]): method name to typed handler
//! - **Handlers** ([`methods`]): static hover, completion, definition, code actions
//!
//! ## Example
//!
//! ```no_run
//! use http_lsp::Server;
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let server = Server::builder()
//!         .with_default_handlers()
//!         .publish_diagnostics_on_change(true)
//!         .build();
//!
//!     server
//!         .serve(tokio::io::stdin(), tokio::io::stdout())
//!         .await
//!         .unwrap();
//! }
//! ```

pub mod codec;
pub mod config;
pub mod error;
pub mod handler;
pub mod lsp;
pub mod methods;
pub mod protocol;

mod logging;
mod server;
mod writer;

pub use config::{DecodeFailurePolicy, ServerConfig};
pub use error::LspError;
pub use logging::{init_logging, open_log_file};
pub use server::{log_fatal, Server, ServerBuilder};
pub use writer::FrameWriter;
