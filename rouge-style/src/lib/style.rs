use crate::color::Color;

pub const ESC_BOLD: &str = "\x1b[1m";
pub const ESC_RESET: &str = "\x1b[0m";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Style {
    pub bold:   bool,
    pub color:  Option<Color>,
}

impl Default for Style {
    /// Bold, bright magenta.
    fn default() -> Self {
        Style {
            bold:   true,
            color:  Some(Color::BrightMagenta),
        }
    }
}

impl Style {
    pub fn plain() -> Self {
        Style { bold: false, color: None }
    }

    pub fn is_plain(&self) -> bool {
        !self.bold && self.color.is_none()
    }

    /// Sequence written before the intercepted output.
    /// Bold comes first, then the foreground color.
    pub fn begin(&self) -> String {
        let mut seq = String::new();
        if self.bold {
            seq.push_str(ESC_BOLD);
        }
        if let Some(c) = self.color {
            seq.push_str(&format!("\x1b[{}m", c.sgr()));
        }

        seq
    }

    /// Sequence written after the intercepted output.
    pub fn end(&self) -> &'static str {
        ESC_RESET
    }
}
