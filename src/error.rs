use thiserror::Error;

/// Why a single match record was rejected at the input boundary.
///
/// Rejected records are skipped by the standings calculator; the error only
/// exists so callers (and the debug log) can see why.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RecordError {
    #[error("match record is not an object")]
    NotAnObject,

    #[error("match record field `{field}` is missing or not text")]
    MissingTeam { field: &'static str },
}

#[derive(Error, Debug)]
pub enum ResultsFileError {
    #[error("failed to read results file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
