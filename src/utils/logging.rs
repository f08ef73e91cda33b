//! File-backed logging.
//!
//! The game owns the terminal, so log records go to ~/.flappy/flappy.log
//! instead of stderr. `RUST_LOG` overrides the default `info` filter.

use super::persistence::data_path;
use crate::core::constants::LOG_FILE;
use env_logger::{Builder, Env, Target};
use std::fs::OpenOptions;
use std::io;
use std::path::PathBuf;

/// Install the global logger. Returns the log file path.
pub fn init_logging() -> io::Result<PathBuf> {
    let path = data_path(LOG_FILE)?;
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(|e| io::Error::new(io::ErrorKind::AlreadyExists, e))?;
    Ok(path)
}
