//! Diagnostic log setup.
//!
//! Stdout carries protocol frames, so logs go to a file. The file is
//! truncated at startup and written through a `Mutex<File>` writer.

use std::fs::{File, OpenOptions};
use std::path::Path;
use std::sync::{Mutex, OnceLock};

use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::error::Result;

static LOGGING_INIT: OnceLock<()> = OnceLock::new();

/// Open (create or truncate) the log file.
pub fn open_log_file(path: &Path) -> Result<File> {
    let file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)?;
    Ok(file)
}

/// Install the global `tracing` subscriber writing to `config.log_path`.
///
/// Only the first call has an effect. The filter comes from
/// `config.log_filter`, never from the environment.
pub fn init_logging(config: &ServerConfig) -> Result<()> {
    if LOGGING_INIT.get().is_some() {
        return Ok(());
    }

    let file = open_log_file(&config.log_path)?;
    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|e| {
        eprintln!("invalid log filter {:?}: {e}", config.log_filter);
        EnvFilter::new("info")
    });

    LOGGING_INIT.get_or_init(|| {
        let result = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_file(true)
            .with_line_number(true)
            .try_init();

        if let Err(err) = result {
            eprintln!("tracing init skipped: {err}");
        }
    });

    Ok(())
}
