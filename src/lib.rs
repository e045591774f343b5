//! Load a polygon mesh, transform it with composed affine operations and
//! write it back out.

pub mod config;
pub mod obj;
pub mod session;
pub mod utils;

pub use crate::config::Config;
pub use crate::session::{Command, Session, SessionError};
