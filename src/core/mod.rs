//! Configuration, timing and startup errors.

#![allow(unused_imports)]

pub mod config;
pub mod constants;
pub mod error;
pub mod timing;

pub use config::*;
pub use constants::*;
pub use error::*;
pub use timing::*;
