#[allow(non_camel_case_types)]
/// Host processes are made to call our `printf` and `puts` instead of libc's
/// via [*function interposition*](https://stackoverflow.com/questions/426230/what-is-the-ld-preload-trick):
/// `librouge.so` is pre-loaded, so its definitions come first in the
/// dynamic symbol search order. Every wrapper writes a "begin" escape
/// sequence, forwards the call to the original function, writes an "end"
/// sequence, and returns what the original returned.
///
/// This module defines the C signatures involved, along with some
/// assistant type aliases (e.g. `void` instead of `c_void`).
mod ffi;

pub mod error;

/// Finds "the next `printf`", i.e. the one we shadow.
pub mod resolve;

pub mod registry;

/// Exported `printf` entry and the `va_list` token it produces.
pub mod variadic;

pub mod decor;

pub mod policy;

/// Contains actual interposing code.
pub mod hooks;

pub use error::{Error, Result};
pub use ffi::{CPrintf, CPuts, CVprintf};
pub use variadic::VaList;
