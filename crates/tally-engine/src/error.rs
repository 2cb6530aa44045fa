use tally_store::StoreError;
use tally_types::{OperationId, ThreadId, UnknownOperator, UserId};

/// Errors surfaced by ledger engine operations.
///
/// None are retried or swallowed inside the engine; a failed append
/// writes nothing. The HTTP collaborator maps the first four to
/// client errors and [`Store`](EngineError::Store) to a server error.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EngineError {
    /// A divide was attempted with a zero operand.
    #[error("division by zero")]
    DivisionByZero,

    /// The base value lookup came back empty: either the thread does
    /// not exist, or the named parent operation does not.
    #[error("ancestor not found on {thread} (parent: {parent:?})")]
    AncestorNotFound {
        thread: ThreadId,
        parent: Option<OperationId>,
    },

    /// The named parent operation exists but belongs to a different
    /// thread; attaching under it would splice two threads' chains.
    #[error("parent {parent} belongs to {parent_thread}, not {thread}")]
    CrossThreadParent {
        parent: OperationId,
        parent_thread: ThreadId,
        thread: ThreadId,
    },

    /// An operator tag did not name one of the four operations. Only
    /// reachable through the string parse boundary.
    #[error(transparent)]
    UnknownOperator(#[from] UnknownOperator),

    /// The acting user has no row in the store. The caller claimed an
    /// authenticated user, so this points at a store inconsistency.
    #[error("author not found: {0}")]
    AuthorNotFound(UserId),

    /// The underlying persistence layer failed. Retrying is the
    /// caller's responsibility.
    #[error(transparent)]
    Store(#[from] StoreError),
}
