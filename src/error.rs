use std::path::PathBuf;

use thiserror::Error;

/// Errors produced by the filesystem adapter.
///
/// The engine treats collaborator errors as opaque; carrying the offending
/// path here is purely for the human reading the final error message.
#[derive(Debug, Error)]
pub enum FsError {
    #[error("failed to read directory {}: {}", path.display(), source)]
    ReadDir {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to stat {}: {}", path.display(), source)]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
