//! Flappy Bird game logic.
//!
//! The bird flies at a fixed column while pipe pairs scroll in from the
//! right. Each pair passed scores a point; touching a pipe or the screen
//! edge ends the session.

#![allow(unused_imports)]

pub mod bird;
pub mod pipe;
pub mod session;
pub mod stream;
pub mod types;

pub use bird::*;
pub use pipe::*;
pub use session::*;
pub use stream::*;
pub use types::*;
