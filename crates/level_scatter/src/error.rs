//! Error types and result alias for the crate.
//!
//! This module defines [`enum@crate::error::Error`] and the crate-wide [Result] alias.
use thiserror::Error;

use crate::section::SectionShape;

pub type Result<T> = std::result::Result<T, Error>;

#[non_exhaustive]
#[derive(Debug, Error, PartialEq)]
pub enum Error {
    /// Rejected generation parameters. Raised before any sampling state is allocated.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// A section shape without a containment test.
    #[error("unsupported section shape {shape:?}")]
    UnsupportedShape { shape: SectionShape },
}

impl Error {
    pub(crate) fn invalid(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}
