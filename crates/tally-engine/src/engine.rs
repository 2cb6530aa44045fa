use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use tally_forest::{build_forest, OperationNode};
use tally_store::{LedgerStore, NewOperation};
use tally_types::{OperationId, Operator, Thread, ThreadId, User, UserId};

use crate::error::EngineError;
use crate::eval;

/// Presentation view of a thread: its root value, author, and the
/// materialized forest of operation trees.
///
/// `operations` holds only root-level nodes (those appended directly
/// to the thread); everything else nests in their `children`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ThreadTree {
    pub id: ThreadId,
    pub initial_value: f64,
    pub created_at: DateTime<Utc>,
    pub author: User,
    pub operations: Vec<OperationNode>,
}

/// The ledger engine façade: evaluator + store + materializer behind
/// the two public flows (append and materialize).
///
/// The store is dependency-injected at construction and borrowed for
/// every call; the engine keeps no state of its own, so any number of
/// reads may run concurrently with appends.
pub struct LedgerEngine<S> {
    store: S,
}

impl<S: LedgerStore> LedgerEngine<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The injected store, for collaborators that share it.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Start a thread at `initial_value` and return its (empty) tree.
    pub fn create_thread(
        &self,
        initial_value: f64,
        author_id: UserId,
    ) -> Result<ThreadTree, EngineError> {
        // Resolve the author first so a bad id writes nothing.
        let author = self
            .store
            .get_user(author_id)?
            .ok_or(EngineError::AuthorNotFound(author_id))?;

        let thread = self.store.create_thread(initial_value, author_id)?;
        debug!(thread = %thread.id, initial_value, author = %author_id, "created thread");

        Ok(ThreadTree {
            id: thread.id,
            initial_value: thread.initial_value,
            created_at: thread.created_at,
            author,
            operations: Vec::new(),
        })
    }

    /// Append one operation under `parent` (or under the thread root
    /// when `parent` is `None`), computing its result from the
    /// parent's value at this moment.
    ///
    /// The result is a snapshot: it is never recomputed, and later
    /// appends elsewhere in the tree cannot change it. All failure
    /// paths leave the ledger unchanged.
    pub fn append(
        &self,
        thread_id: ThreadId,
        parent: Option<OperationId>,
        operator: Operator,
        operand: f64,
        author_id: UserId,
    ) -> Result<OperationNode, EngineError> {
        let base = match parent {
            Some(parent_id) => {
                let parent_record = self.store.get_operation(parent_id)?.ok_or(
                    EngineError::AncestorNotFound {
                        thread: thread_id,
                        parent: Some(parent_id),
                    },
                )?;
                if parent_record.thread_id != thread_id {
                    return Err(EngineError::CrossThreadParent {
                        parent: parent_id,
                        parent_thread: parent_record.thread_id,
                        thread: thread_id,
                    });
                }
                parent_record.result
            }
            None => {
                self.store
                    .get_thread(thread_id)?
                    .ok_or(EngineError::AncestorNotFound {
                        thread: thread_id,
                        parent: None,
                    })?
                    .initial_value
            }
        };

        let author = self
            .store
            .get_user(author_id)?
            .ok_or(EngineError::AuthorNotFound(author_id))?;

        // Evaluate before touching the ledger: a division by zero
        // must not insert a row.
        let result = eval::apply(base, operator, operand)?;

        let record = self.store.insert_operation(NewOperation {
            thread_id,
            parent_operation_id: parent,
            operator,
            operand,
            result,
            author_id,
        })?;
        debug!(
            operation = %record.id,
            thread = %thread_id,
            %operator,
            operand,
            result,
            "appended operation"
        );

        // Newly created, so no children yet.
        Ok(OperationNode::from_record(record, author))
    }

    /// Materialize every thread's operation forest for presentation.
    ///
    /// Threads come back most recent first — the opposite of the
    /// creation order used *inside* each tree. The read is not
    /// linearizable with concurrent appends; it reflects whatever
    /// rows the store returns.
    pub fn materialize(&self) -> Result<Vec<ThreadTree>, EngineError> {
        let mut threads = self.store.list_threads()?;
        threads.sort_by_key(Thread::ledger_key);
        threads.reverse();

        let mut trees = Vec::with_capacity(threads.len());
        for thread in threads {
            if let Some(tree) = self.tree_for(thread)? {
                trees.push(tree);
            }
        }
        Ok(trees)
    }

    /// Materialize a single thread, or `None` if it does not exist.
    pub fn materialize_thread(
        &self,
        thread_id: ThreadId,
    ) -> Result<Option<ThreadTree>, EngineError> {
        match self.store.get_thread(thread_id)? {
            Some(thread) => self.tree_for(thread),
            None => Ok(None),
        }
    }

    /// Build one thread's tree, resolving authors and running the
    /// forest pass. Rows whose author vanished from the store are
    /// dropped, matching the reference system's inner join.
    fn tree_for(&self, thread: Thread) -> Result<Option<ThreadTree>, EngineError> {
        let Some(author) = self.store.get_user(thread.author_id)? else {
            warn!(
                thread = %thread.id,
                author = %thread.author_id,
                "dropping thread with missing author"
            );
            return Ok(None);
        };

        let records = self.store.list_operations(thread.id)?;
        let mut authors: HashMap<UserId, User> = HashMap::new();
        authors.insert(author.id, author.clone());

        let mut nodes = Vec::with_capacity(records.len());
        for record in records {
            let record_author = match authors.get(&record.author_id) {
                Some(known) => Some(known.clone()),
                None => {
                    let fetched = self.store.get_user(record.author_id)?;
                    if let Some(user) = &fetched {
                        authors.insert(user.id, user.clone());
                    }
                    fetched
                }
            };

            match record_author {
                Some(user) => nodes.push(OperationNode::from_record(record, user)),
                None => warn!(
                    operation = %record.id,
                    author = %record.author_id,
                    "dropping operation with missing author"
                ),
            }
        }

        Ok(Some(ThreadTree {
            id: thread.id,
            initial_value: thread.initial_value,
            created_at: thread.created_at,
            author,
            operations: build_forest(nodes),
        }))
    }
}
