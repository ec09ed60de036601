use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    BrightBlack,
    BrightRed,
    BrightGreen,
    BrightYellow,
    BrightBlue,
    BrightMagenta,
    BrightCyan,
    BrightWhite,
}

/// Ordered by SGR code: the first 8 map to 30..=37,
/// the rest to 90..=97.
const ALL: [Color; 16] = [
    Color::Black,
    Color::Red,
    Color::Green,
    Color::Yellow,
    Color::Blue,
    Color::Magenta,
    Color::Cyan,
    Color::White,
    Color::BrightBlack,
    Color::BrightRed,
    Color::BrightGreen,
    Color::BrightYellow,
    Color::BrightBlue,
    Color::BrightMagenta,
    Color::BrightCyan,
    Color::BrightWhite,
];

const BASE_NAMES: [&str; 8] = [
    "black", "red", "green", "yellow", "blue", "magenta", "cyan", "white",
];

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown color `{input}` (expected a color name or an SGR code in 30-37/90-97)")]
pub struct ParseError {
    pub input: String,
}

impl Color {
    #[inline]
    fn index(self) -> usize {
        self as usize
    }

    pub fn is_bright(self) -> bool {
        self.index() >= 8
    }

    /// Select Graphic Rendition parameter for this foreground color.
    pub fn sgr(self) -> u8 {
        let idx = self.index() as u8;
        if self.is_bright() {
            90 + (idx - 8)
        } else {
            30 + idx
        }
    }

    pub fn from_sgr(code: u8) -> Option<Color> {
        match code {
            30..=37 => Some(ALL[(code - 30) as usize]),
            90..=97 => Some(ALL[(code - 90) as usize + 8]),
            _       => None,
        }
    }

    pub fn all() -> impl Iterator<Item = Color> {
        ALL.into_iter()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let base = BASE_NAMES[self.index() % 8];
        if self.is_bright() {
            write!(f, "bright-{}", base)
        } else {
            f.write_str(base)
        }
    }
}

impl FromStr for Color {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseError { input: s.to_string() };
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(err());
        }
        if trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return trimmed
                .parse::<u8>()
                .ok()
                .and_then(Color::from_sgr)
                .ok_or_else(err);
        }

        // `bright-red`, `bright_red`, `brightred` and `BrightRed` are all accepted.
        let folded: String = trimmed
            .chars()
            .filter(|c| *c != '-' && *c != '_')
            .map(|c| c.to_ascii_lowercase())
            .collect();
        if folded == "pink" {
            return Ok(Color::BrightMagenta);
        }
        let (bright, base) = match folded.strip_prefix("bright") {
            Some(rest)  => (true, rest),
            None        => (false, folded.as_str()),
        };
        let idx = BASE_NAMES
            .iter()
            .position(|name| *name == base)
            .ok_or_else(err)?;

        Ok(ALL[idx + if bright { 8 } else { 0 }])
    }
}
