use std::path::PathBuf;

/// Everything that can go wrong between a handler and the SQLite file.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store could not be reached at all. Callers must treat this as
    /// "operation unavailable", never as an empty result.
    #[error("store unavailable: {0}")]
    Connection(String),
    /// The schema script path does not exist.
    #[error("schema script not found: {}", .0.display())]
    ScriptNotFound(PathBuf),
    /// A statement in the schema script failed; the whole script was
    /// rolled back.
    #[error("schema initialization failed: {0}")]
    Schema(#[source] rusqlite::Error),
    /// Unique constraint violation on `description`.
    #[error("a program with this description already exists")]
    DuplicateProgram,
    /// Any other statement failure.
    #[error("store operation failed: {0}")]
    Store(#[from] rusqlite::Error),
}

/// Sort a raw SQLite failure into the taxonomy. Unique-constraint hits on
/// insert become [`StoreError::DuplicateProgram`].
pub(crate) fn classify(e: rusqlite::Error) -> StoreError {
    match e {
        rusqlite::Error::SqliteFailure(err, _)
            if err.code == rusqlite::ErrorCode::ConstraintViolation =>
        {
            StoreError::DuplicateProgram
        }
        other => StoreError::Store(other),
    }
}
