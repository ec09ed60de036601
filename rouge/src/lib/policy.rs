use crate::decor::Decoration;
use crate::error::{Error, Result};
use crate::ffi::fatal;
use once_cell::sync::Lazy;
use rouge_style::{Config, Mode};

/// Mode used when `ROUGE_MODE` is not set, fixed at build time.
pub const DEFAULT_MODE: Mode = if cfg!(feature = "cosmetic") {
    Mode::Decorate
} else {
    Mode::PassThrough
};

pub fn from_config(cfg: &Config) -> Result<Option<Decoration>> {
    match cfg.decoration() {
        Some((begin, end)) => {
            let deco = Decoration::new(&begin, end).ok_or(Error::BadSequence)?;
            Ok(Some(deco))
        },
        None => Ok(None),
    }
}

pub fn load() -> Result<Option<Decoration>> {
    let cfg = Config::from_env(DEFAULT_MODE)?;
    from_config(&cfg)
}

/// Process-wide decoration, read from the environment on first use.
/// `None` means the wrappers are pass-throughs.
static ACTIVE: Lazy<Option<Decoration>> = Lazy::new(|| match load() {
    Ok(deco) => deco,
    Err(e)   => unsafe { fatal(&e) },
});

#[inline]
pub fn active() -> Option<&'static Decoration> {
    ACTIVE.as_ref()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rouge_style::Style;

    #[test]
    #[cfg(feature = "cosmetic")]
    fn default_build_decorates() {
        assert_eq!(DEFAULT_MODE, Mode::Decorate);
        let deco = from_config(&Config::new(DEFAULT_MODE)).unwrap().unwrap();
        assert_eq!(deco.begin.as_bytes(), b"\x1b[1m\x1b[95m");
        assert_eq!(deco.end.as_bytes(), b"\x1b[0m");
    }

    #[test]
    fn pass_through_and_plain_mean_nothing_to_write() {
        assert!(from_config(&Config::new(Mode::PassThrough)).unwrap().is_none());
        let plain = Config { mode: Mode::Decorate, style: Style::plain() };
        assert!(from_config(&plain).unwrap().is_none());
    }
}
