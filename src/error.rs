//! Error taxonomy for the extraction pipeline.
//!
//! Failures are fatal to the current run: a source error halts the pipeline
//! before any result is produced, and a sink error leaves already-written
//! rows in place but reports the run as incomplete. Retries, if any, belong
//! to the I/O layer supplying the source and sink, not to this crate.

use std::io;

use thiserror::Error;

/// Errors surfaced by a pipeline run.
#[derive(Debug, Error)]
pub enum TopKError {
    /// The line source failed while producing input.
    ///
    /// No result sequence is produced; the partially built frequency table
    /// is discarded.
    #[error("input source failed: {source}")]
    Source {
        #[source]
        source: io::Error,
    },

    /// The row sink failed while accepting output.
    ///
    /// Rows accepted before the failure remain written; there is no
    /// rollback.
    #[error("output sink failed: {source}")]
    Sink {
        #[source]
        source: io::Error,
    },
}

impl TopKError {
    /// Wrap an I/O error from the input side.
    pub fn source(err: io::Error) -> Self {
        Self::Source { source: err }
    }

    /// Wrap an I/O error from the output side.
    pub fn sink(err: io::Error) -> Self {
        Self::Sink { source: err }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TopKError>;
