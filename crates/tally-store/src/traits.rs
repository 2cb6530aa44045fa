use tally_types::{OperationId, OperationRecord, Operator, Thread, ThreadId, User, UserId};

use crate::error::StoreResult;

/// Insert payload for a new operation record.
///
/// Everything except the id and creation stamp, which the store
/// assigns. The engine has already resolved the parent value and
/// computed `result`; the store performs no validation of its own.
#[derive(Clone, Debug, PartialEq)]
pub struct NewOperation {
    pub thread_id: ThreadId,
    pub parent_operation_id: Option<OperationId>,
    pub operator: Operator,
    pub operand: f64,
    pub result: f64,
    pub author_id: UserId,
}

/// Storage boundary for the three ledger relations.
///
/// Implementations must satisfy these invariants:
/// - Ids are monotonically increasing per relation and never reused.
/// - Rows are immutable once written; `insert_operation` is the only
///   way the operations relation grows.
/// - A single insert is atomic and durable before the call returns.
/// - Listing methods return rows in creation order, `(created_at, id)`
///   ascending.
/// - Concurrent reads are always safe; calls may fail with
///   [`StoreError`](crate::StoreError) but never hang.
pub trait LedgerStore: Send + Sync {
    /// Insert a user row and return it with its assigned id.
    ///
    /// Credential handling lives with the auth collaborator; the
    /// ledger stores only what it needs to attribute records.
    fn insert_user(&self, username: &str) -> StoreResult<User>;

    /// Look up a user by id. Returns `Ok(None)` if the row is missing.
    fn get_user(&self, id: UserId) -> StoreResult<Option<User>>;

    /// Create a thread rooted at `initial_value` and return it.
    fn create_thread(&self, initial_value: f64, author_id: UserId) -> StoreResult<Thread>;

    /// Look up a thread by id.
    fn get_thread(&self, id: ThreadId) -> StoreResult<Option<Thread>>;

    /// Look up a single operation record by its global id.
    fn get_operation(&self, id: OperationId) -> StoreResult<Option<OperationRecord>>;

    /// Append an operation record, assigning its id and creation
    /// stamp, and return the stored row.
    fn insert_operation(&self, operation: NewOperation) -> StoreResult<OperationRecord>;

    /// All threads in creation order.
    fn list_threads(&self) -> StoreResult<Vec<Thread>>;

    /// All operations belonging to `thread`, in creation order.
    fn list_operations(&self, thread: ThreadId) -> StoreResult<Vec<OperationRecord>>;
}
