use crate::color::Color;
use crate::style::Style;
use std::env;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

pub const MODE_VAR: &str = "ROUGE_MODE";
pub const COLOR_VAR: &str = "ROUGE_COLOR";
pub const BOLD_VAR: &str = "ROUGE_BOLD";

/// Whether the interposed functions decorate their output,
/// or behave exactly like the functions they shadow.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Decorate,
    PassThrough,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value `{value}` for {var}: {reason}")]
    Invalid {
        var:    &'static str,
        value:  String,
        reason: String,
    },
}

fn parse_switch(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "1" | "on" | "true" | "yes"     => Some(true),
        "0" | "off" | "false" | "no"    => Some(false),
        _                               => None,
    }
}

impl FromStr for Mode {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "decorate"                      => Ok(Mode::Decorate),
            "passthrough" | "pass-through"  => Ok(Mode::PassThrough),
            other => match parse_switch(other) {
                Some(true)  => Ok(Mode::Decorate),
                Some(false) => Ok(Mode::PassThrough),
                None        => Err(()),
            },
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Mode::Decorate      => "decorate",
            Mode::PassThrough   => "passthrough",
        })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    pub mode:   Mode,
    pub style:  Style,
}

impl Config {
    pub fn new(mode: Mode) -> Self {
        Config { mode, style: Style::default() }
    }

    /// Builds a configuration out of any variable lookup. Unset
    /// and empty variables keep their defaults; `default_mode` is
    /// what applies when `ROUGE_MODE` is absent.
    pub fn from_lookup<F>(default_mode: Mode, lookup: F) -> crate::Result<Config>
    where F: Fn(&str) -> Option<String> {
        let fetch = |var: &str| lookup(var).filter(|v| !v.trim().is_empty());
        let mut cfg = Config::new(default_mode);

        if let Some(value) = fetch(MODE_VAR) {
            cfg.mode = value.parse().map_err(|_| ConfigError::Invalid {
                var:    MODE_VAR,
                reason: "expected `decorate` or `passthrough`".to_string(),
                value,
            })?;
        }
        if let Some(value) = fetch(COLOR_VAR) {
            cfg.style.color = if value.trim().eq_ignore_ascii_case("none") {
                None
            } else {
                Some(value.parse::<Color>().map_err(|e| ConfigError::Invalid {
                    var:    COLOR_VAR,
                    reason: e.to_string(),
                    value:  value.clone(),
                })?)
            };
        }
        if let Some(value) = fetch(BOLD_VAR) {
            cfg.style.bold = parse_switch(&value).ok_or_else(|| ConfigError::Invalid {
                var:    BOLD_VAR,
                reason: "expected a boolean".to_string(),
                value:  value.clone(),
            })?;
        }

        Ok(cfg)
    }

    pub fn from_env(default_mode: Mode) -> crate::Result<Config> {
        Config::from_lookup(default_mode, |var| env::var(var).ok())
    }

    /// Variables that make [`Config::from_env`] rebuild `self`,
    /// whatever the default mode of the reader.
    pub fn env_pairs(&self) -> Vec<(&'static str, String)> {
        let color = match self.style.color {
            Some(c) => c.to_string(),
            None    => "none".to_string(),
        };

        vec![
            (MODE_VAR, self.mode.to_string()),
            (COLOR_VAR, color),
            (BOLD_VAR, if self.style.bold { "1" } else { "0" }.to_string()),
        ]
    }

    /// The `(begin, end)` sequences to wrap output with, if any.
    pub fn decoration(&self) -> Option<(String, &'static str)> {
        match self.mode {
            Mode::PassThrough                   => None,
            Mode::Decorate if self.style.is_plain() => None,
            Mode::Decorate                      => Some((self.style.begin(), self.style.end())),
        }
    }
}
