//! `http-lsp` binary: serve one editor over stdin/stdout.

use std::process::ExitCode;

use http_lsp::{init_logging, log_fatal, Server, ServerConfig};

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let config = ServerConfig::default();

    if let Err(e) = init_logging(&config) {
        eprintln!("failed to open log file {}: {e}", config.log_path.display());
        return ExitCode::FAILURE;
    }
    tracing::info!("starting");

    let server = Server::builder()
        .config(config)
        .with_default_handlers()
        .build();

    match server.serve(tokio::io::stdin(), tokio::io::stdout()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log_fatal(&e);
            ExitCode::FAILURE
        }
    }
}
