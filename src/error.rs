//! Error types for dirtree
//!
//! Every failure aborts the walk at the point it happens; nothing is retried
//! or skipped.

use std::io;
use std::path::PathBuf;

use crate::tree::NodeKind;

/// Unified error type for tree rendering
#[derive(Debug, thiserror::Error)]
pub enum TreeError {
    /// Metadata lookup failed (not found, permission denied, ...)
    #[error("stat {}: {source}", .path.display())]
    Stat {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Directory listing failed
    #[error("open {}: {source}", .path.display())]
    ReadDir {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Writing a rendered line failed
    #[error("write: {0}")]
    Output(#[from] io::Error),

    /// Entry classified as a kind that has no printable form
    #[error("unknown node type: {0}")]
    UnknownNodeType(NodeKind),
}

/// Convenience Result type using TreeError
pub type Result<T> = std::result::Result<T, TreeError>;

impl TreeError {
    /// Create a Stat error
    pub fn stat(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Stat {
            path: path.into(),
            source,
        }
    }

    /// Create a ReadDir error
    pub fn read_dir(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::ReadDir {
            path: path.into(),
            source,
        }
    }

    /// True for filesystem and output failures, false for internal ones
    pub fn is_io(&self) -> bool {
        !matches!(self, Self::UnknownNodeType(_))
    }
}
