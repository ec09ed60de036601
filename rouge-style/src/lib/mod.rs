//! Decoration policy shared by the `rouge` interposer and its launcher.
//!
//! Nothing in here touches the C runtime. The interposer turns a [`Config`]
//! into the two byte sequences it wraps around every intercepted write; the
//! launcher turns one into environment variables.

/// The 16 ANSI foreground colors.
mod color;

/// Bold/color combinations and the escape sequences they produce.
mod style;

mod config;

pub use color::{Color, ParseError};
pub use config::{Config, ConfigError, Mode, BOLD_VAR, COLOR_VAR, MODE_VAR};
pub use style::{Style, ESC_BOLD, ESC_RESET};

pub type Result<T> = std::result::Result<T, ConfigError>;
