use std::io;
use std::path::PathBuf;

/// Errors from loading or saving documents.
///
/// Editing commands never fail; only filesystem round-trips do.
#[derive(Debug, thiserror::Error)]
pub enum FileError {
    /// The file could not be read. The document set is left unchanged.
    #[error("failed to read {}: {source}", path.display())]
    Read {
        /// Path that was requested.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// The file could not be written. The document stays dirty.
    #[error("failed to write {}: {source}", path.display())]
    Write {
        /// Path that was written to.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// Save was requested for an Untitled buffer; the host must ask for a path (save-as).
    #[error("document has no path; choose one with save-as")]
    NoPath,
}
