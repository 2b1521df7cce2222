//! Error type shared by the parser, navigator and writer.

use thiserror::Error;

/// Failure raised while parsing a property path or writing through one.
///
/// Read misses are not errors: the reader reports them as `None`.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    /// The path text does not follow the property path grammar.
    #[error("invalid path syntax in `{path}`: {reason}")]
    InvalidPathSyntax { path: String, reason: String },
    /// The path parsed, but its target cannot receive a value.
    #[error("invalid target path `{path}`: {reason}")]
    InvalidTargetPath { path: String, reason: String },
    /// A mandatory argument was empty.
    #[error("missing required argument: {0}")]
    MissingRequiredArgument(&'static str),
}

impl PathError {
    pub(crate) fn syntax(path: &str, reason: impl Into<String>) -> Self {
        Self::InvalidPathSyntax {
            path: path.to_string(),
            reason: reason.into(),
        }
    }

    pub(crate) fn target(path: impl ToString, reason: impl Into<String>) -> Self {
        Self::InvalidTargetPath {
            path: path.to_string(),
            reason: reason.into(),
        }
    }
}
