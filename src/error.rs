//! Unified error type.

use std::path::PathBuf;

/// The error type returned by tourbook's fallible operations.
///
/// Application-level outcomes (404, 405, etc.) are expressed as HTTP
/// [`Response`](crate::Response) values, not as `Error`s. This type surfaces
/// infrastructure failures: loading the tour data, binding to a port, or
/// accepting a connection.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The tour data file could not be read.
    #[error("failed to read tour data from `{path}`: {source}")]
    ReadData {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The tour data file is not a JSON array of objects.
    #[error("tour data in `{path}` is not a JSON array of objects: {source}")]
    ParseData {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("io: {0}")]
    Io(#[from] std::io::Error),
}
