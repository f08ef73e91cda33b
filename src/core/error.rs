//! Startup error types.
//!
//! Nothing inside the tick loop returns these: a crash into a pipe is a
//! session outcome, not an error.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A configuration that cannot drive a session.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("could not parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("frame rate must be positive")]
    ZeroFrameRate,
    #[error("{0} must be positive")]
    ZeroDimension(&'static str),
    #[error("jump_steps must be positive")]
    ZeroJumpSteps,
    #[error("bird does not fit on a {width}x{height} screen")]
    BirdOffScreen { width: u32, height: u32 },
    #[error("screen height leaves {total} pipe pieces, need at least 2")]
    PipeBudgetTooSmall { total: i64 },
}

/// Anything that can abort the program before or around the game loop.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
}
