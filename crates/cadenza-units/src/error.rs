//! Error types for musical value construction and conversion.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("Cannot parse '{token}': expected {expected}")]
    Parse {
        token: String,
        expected: &'static str,
    },

    #[error("Unknown unit '{0}': expected one of hz, midi, note, s, samples, i, ticks, beats, n, t, m, tr")]
    UnknownUnit(String),

    #[error("Value {value} out of domain: expected {expected}")]
    Domain { value: f64, expected: &'static str },

    #[error("Tempo context is no longer available")]
    MissingContext,

    #[error(transparent)]
    Core(#[from] cadenza_core::Error),
}

impl Error {
    pub(crate) fn parse(token: impl Into<String>, expected: &'static str) -> Self {
        Error::Parse {
            token: token.into(),
            expected,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
