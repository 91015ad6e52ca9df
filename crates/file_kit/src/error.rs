//! Typed failures surfaced by facade file operations.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Failure raised by facade file operations.
pub enum FileAccessError {
    /// A required URL or path argument was empty.
    EmptyReference,
    /// The file extension matched no openable category.
    UnsupportedType {
        /// Lowercased extension that failed classification.
        ext: String,
    },
    /// Failure value returned by the host file-service, carried verbatim.
    Host(String),
}

impl FileAccessError {
    /// Returns a stable error token for diagnostics.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::EmptyReference => "empty-reference",
            Self::UnsupportedType { .. } => "unsupported-type",
            Self::Host(_) => "host",
        }
    }
}

impl fmt::Display for FileAccessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyReference => write!(f, "file reference is empty"),
            Self::UnsupportedType { ext } => write!(f, "unsupported file type: {ext}"),
            Self::Host(error) => write!(f, "host operation failed: {error}"),
        }
    }
}

impl std::error::Error for FileAccessError {}
