//! Launching commands under `librouge`.
//!
//! The loader only needs two things: the library in the pre-load list and
//! the decoration policy in the environment. [`Launch`] assembles both.

mod cli;
mod launch;

pub use cli::Args;
pub use launch::{default_library, Launch, LIBRARY_FILE, PRELOAD_VAR};
