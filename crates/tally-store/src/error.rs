/// Errors from ledger store operations.
///
/// Missing rows are not errors — lookups return `Ok(None)` — so the
/// only failure mode a backend can report is being unable to serve
/// the request at all. Retrying is the caller's responsibility.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The underlying persistence layer failed (I/O error, poisoned
    /// lock, lost connection).
    #[error("store unavailable: {0}")]
    Unavailable(String),
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
