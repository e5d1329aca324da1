//! Error types for boxedge operations.

use thiserror::Error;

/// Errors that can occur while turning a shorthand declaration into longhands.
///
/// A value list with the wrong number of entries is not an error: it is
/// reported through a [`DiagnosticSink`](crate::style::DiagnosticSink) and
/// the declaration expands to nothing.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("value list entry {index} is not a primitive value")]
    TypeMismatch { index: usize },

    #[error("'{0}' is not a box-edge shorthand")]
    UnsupportedProperty(String),

    #[error("no value declared for '{0}'")]
    MissingProperty(String),

    #[error("invalid value: {0}")]
    InvalidValue(String),
}

pub type Result<T> = std::result::Result<T, Error>;
