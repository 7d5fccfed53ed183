//! Error types for the diff crate.

use std::path::PathBuf;

/// Errors that can occur while building or rendering a diff report.
#[derive(Debug, thiserror::Error)]
pub enum DiffError {
    /// A step was popped while the traversal path was empty.
    #[error("pop on an empty traversal path")]
    EmptyPath,

    /// A leaf was reported while no step was on the traversal path.
    #[error("leaf reported with no step on the traversal path")]
    NoActiveStep,

    /// A lookup reached past the bottom of the traversal path.
    #[error("depth {requested} from top is out of range for a path of depth {depth}")]
    DepthOutOfRange { requested: usize, depth: usize },

    /// The diff tree could not be rendered.
    #[error("error serializing diff report: {0}")]
    Serialization(String),

    /// A redaction rule file was malformed.
    #[error("invalid redaction config: {0}")]
    Config(String),

    /// A redaction rule file could not be read.
    #[error("failed to read {path:?}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Convenience alias for diff results.
pub type DiffResult<T> = Result<T, DiffError>;
