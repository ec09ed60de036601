use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    /// `dlsym(RTLD_NEXT, ..)` found nothing after this module.
    #[error("cannot resolve the next definition of `{symbol}`: {reason}")]
    Unresolved {
        symbol: String,
        reason: String,
    },

    #[error("escape sequence contains a NUL byte")]
    BadSequence,

    #[error(transparent)]
    Config(#[from] rouge_style::ConfigError),
}

pub type Result<T> = std::result::Result<T, Error>;
