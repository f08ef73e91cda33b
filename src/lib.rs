//! Flappy Bird - Terminal Edition
//!
//! This module exposes the game logic for testing and the binary.

pub mod cli;
pub mod core;
pub mod game;
pub mod input;
pub mod ui;
pub mod utils;

pub use crate::core::config::GameConfig;
pub use crate::core::error::{ConfigError, GameError};
pub use crate::game::{EndReason, GameEvent, Session, SessionState, TickResult};
