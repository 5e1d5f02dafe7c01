//! Shared error types
//!
//! Every failure the object store can produce is one of these variants.
//! Commands bubble them up through `anyhow`; nothing below `main` terminates
//! the process.

use std::path::PathBuf;
use thiserror::Error;

/// Failures raised by the object database.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage root is missing. The database never creates it itself;
    /// that is `init`'s job.
    #[error("object store root {path} does not exist, run init first")]
    StoreUnavailable { path: PathBuf },

    /// An object file or its shard directory could not be written.
    #[error("unable to persist object at {path}")]
    PersistFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Failures raised while constructing blob and tree objects.
#[derive(Debug, Error)]
pub enum ObjectError {
    /// A source file or directory could not be opened or fully read.
    #[error("unable to read source {path}")]
    SourceUnreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The recursion ceiling was reached while walking a directory tree.
    #[error("maximum directory depth ({max}) reached at {path}")]
    MaxDepthExceeded { path: PathBuf, max: usize },

    /// A digest was requested from an object whose construction has not
    /// finished. Construction is eager, so reaching this indicates a bug in
    /// the caller.
    #[error("object digest requested before construction completed")]
    NotReady,

    #[error(transparent)]
    Store(#[from] StoreError),
}
