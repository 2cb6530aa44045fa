use std::collections::BTreeMap;
use std::sync::RwLock;

use chrono::Utc;
use tracing::debug;

use tally_types::{OperationId, OperationRecord, Thread, ThreadId, User, UserId};

use crate::error::{StoreError, StoreResult};
use crate::traits::{LedgerStore, NewOperation};

/// In-memory ledger store for tests, local demos, and embedding.
///
/// Rows live in id-keyed maps behind a single `RwLock`; ids are
/// assigned from per-relation counters, so id order is creation
/// order. Every mutating call completes while holding the write
/// lock, which gives the single-insert atomicity the
/// [`LedgerStore`] contract requires.
pub struct InMemoryStore {
    inner: RwLock<StoreState>,
}

#[derive(Default)]
struct StoreState {
    users: BTreeMap<UserId, User>,
    threads: BTreeMap<ThreadId, Thread>,
    operations: BTreeMap<OperationId, OperationRecord>,
    next_user: i64,
    next_thread: i64,
    next_operation: i64,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(StoreState::default()),
        }
    }

    fn read(&self) -> StoreResult<std::sync::RwLockReadGuard<'_, StoreState>> {
        self.inner
            .read()
            .map_err(|_| StoreError::Unavailable("store read lock poisoned".into()))
    }

    fn write(&self) -> StoreResult<std::sync::RwLockWriteGuard<'_, StoreState>> {
        self.inner
            .write()
            .map_err(|_| StoreError::Unavailable("store write lock poisoned".into()))
    }
}

impl Default for InMemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl LedgerStore for InMemoryStore {
    fn insert_user(&self, username: &str) -> StoreResult<User> {
        let mut state = self.write()?;
        state.next_user += 1;
        let user = User {
            id: UserId(state.next_user),
            username: username.to_string(),
            created_at: Utc::now(),
        };
        debug!(user = %user.id, username, "inserted user");
        state.users.insert(user.id, user.clone());
        Ok(user)
    }

    fn get_user(&self, id: UserId) -> StoreResult<Option<User>> {
        Ok(self.read()?.users.get(&id).cloned())
    }

    fn create_thread(&self, initial_value: f64, author_id: UserId) -> StoreResult<Thread> {
        let mut state = self.write()?;
        state.next_thread += 1;
        let thread = Thread {
            id: ThreadId(state.next_thread),
            initial_value,
            author_id,
            created_at: Utc::now(),
        };
        debug!(thread = %thread.id, initial_value, "created thread");
        state.threads.insert(thread.id, thread.clone());
        Ok(thread)
    }

    fn get_thread(&self, id: ThreadId) -> StoreResult<Option<Thread>> {
        Ok(self.read()?.threads.get(&id).cloned())
    }

    fn get_operation(&self, id: OperationId) -> StoreResult<Option<OperationRecord>> {
        Ok(self.read()?.operations.get(&id).cloned())
    }

    fn insert_operation(&self, operation: NewOperation) -> StoreResult<OperationRecord> {
        let mut state = self.write()?;
        state.next_operation += 1;
        let record = OperationRecord {
            id: OperationId(state.next_operation),
            thread_id: operation.thread_id,
            parent_operation_id: operation.parent_operation_id,
            operator: operation.operator,
            operand: operation.operand,
            result: operation.result,
            author_id: operation.author_id,
            created_at: Utc::now(),
        };
        debug!(
            operation = %record.id,
            thread = %record.thread_id,
            operator = %record.operator,
            result = record.result,
            "appended operation"
        );
        state.operations.insert(record.id, record.clone());
        Ok(record)
    }

    fn list_threads(&self) -> StoreResult<Vec<Thread>> {
        let state = self.read()?;
        let mut threads: Vec<_> = state.threads.values().cloned().collect();
        threads.sort_by_key(Thread::ledger_key);
        Ok(threads)
    }

    fn list_operations(&self, thread: ThreadId) -> StoreResult<Vec<OperationRecord>> {
        let state = self.read()?;
        let mut operations: Vec<_> = state
            .operations
            .values()
            .filter(|op| op.thread_id == thread)
            .cloned()
            .collect();
        operations.sort_by_key(OperationRecord::ledger_key);
        Ok(operations)
    }
}
