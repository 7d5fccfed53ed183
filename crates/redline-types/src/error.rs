use thiserror::Error;

/// Errors produced by type operations.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum TypeError {
    #[error("type tag must not be empty")]
    EmptyTag,

    #[error("type tag contains whitespace: {0:?}")]
    WhitespaceInTag(String),

    #[error("encoding error: {0}")]
    Encoding(String),
}
