//! Index error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, persisting, loading or querying an index.
#[derive(Error, Debug)]
pub enum IndexError {
    /// A working buffer could not be reserved.
    #[error("Failed to allocate {what} ({requested} entries)")]
    AllocationFailure {
        /// Which buffer was being reserved.
        what: &'static str,
        /// Number of elements requested.
        requested: usize,
    },

    /// The corpus does not fit 32-bit offsets.
    #[error("Corpus of {len} bytes exceeds the 32-bit offset limit")]
    CorpusTooLarge {
        /// Corpus length in bytes.
        len: usize,
    },

    /// A store file could not be opened, read, mapped or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        /// File that failed.
        path: PathBuf,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Persisted data is inconsistent.
    #[error("Corrupt index '{name}': {reason}")]
    CorruptIndex {
        /// Index name.
        name: String,
        /// What was wrong.
        reason: String,
    },

    /// The name stored in the `.idx` header differs from the requested one.
    #[error("Index name mismatch: expected '{expected}', found '{found}'")]
    NameMismatch {
        /// Requested name.
        expected: String,
        /// Name stored on disk.
        found: String,
    },

    /// The index name cannot be stored or used as a file stem.
    #[error("Invalid index name '{0}'")]
    InvalidName(String),

    /// The query cannot be answered.
    #[error("Invalid query: {0}")]
    InvalidQuery(&'static str),
}

impl IndexError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        IndexError::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn corrupt(name: &str, reason: impl Into<String>) -> Self {
        IndexError::CorruptIndex {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result alias for index operations.
pub type Result<T> = std::result::Result<T, IndexError>;

/// Reserve room for `additional` elements or report an allocation failure.
pub(crate) fn try_reserve<T>(
    buf: &mut Vec<T>,
    additional: usize,
    what: &'static str,
) -> Result<()> {
    buf.try_reserve_exact(additional)
        .map_err(|_| IndexError::AllocationFailure {
            what,
            requested: additional,
        })
}
