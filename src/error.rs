//! Error types for tree building

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failures that abort a whole traversal.
///
/// Only input validation and root-level failures end up here. Problems with
/// individual descendants are absorbed by the builder (see [`Skip`]).
#[derive(Debug, Error)]
pub enum TraversalError {
    #[error("invalid depth bound {depth}: must be non-negative")]
    InvalidDepth { depth: i64 },

    #[error("cannot access '{}': {source}", .path.display())]
    RootUnreadable {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("traversal cancelled at '{}'", .path.display())]
    Cancelled { path: PathBuf },
}

impl TraversalError {
    pub(crate) fn root_unreadable(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::RootUnreadable {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn root_missing(path: impl Into<PathBuf>) -> Self {
        Self::root_unreadable(
            path,
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        )
    }
}

/// Why a descendant entry was left out of the tree.
///
/// These are recovered conditions: they are logged and the walk carries on
/// with the remaining siblings.
#[derive(Debug, Error)]
pub enum Skip {
    /// Entry vanished, is a broken symlink, or its type cannot be determined.
    #[error("entry cannot be classified")]
    Unclassifiable,

    /// Directory was classified but its listing failed.
    #[error("directory listing failed: {0}")]
    Unlistable(#[source] io::Error),
}
