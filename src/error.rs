//! Centralized error type for the cadenza umbrella crate.
//!
//! Wraps subsystem errors so `?` propagates naturally across crate boundaries.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] cadenza_core::Error),

    #[error(transparent)]
    Units(#[from] cadenza_units::Error),

    #[error("Default tempo context is already installed")]
    DefaultContextInstalled,

    #[error("No default tempo context installed")]
    MissingContext,
}

pub type Result<T> = std::result::Result<T, Error>;
