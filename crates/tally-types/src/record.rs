use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::ids::{OperationId, ThreadId, UserId};
use crate::operator::Operator;

/// A user as the ledger sees it.
///
/// Owned by the auth collaborator; credential material never crosses
/// the engine boundary. Immutable once created.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub username: String,
    pub created_at: DateTime<Utc>,
}

/// Root of an operation forest: a thread starts from `initial_value`
/// and accumulates operation records forever.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Thread {
    pub id: ThreadId,
    pub initial_value: f64,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl Thread {
    /// Creation-order sort key: `(created_at, id)` ascending.
    pub fn ledger_key(&self) -> (DateTime<Utc>, ThreadId) {
        (self.created_at, self.id)
    }
}

/// One immutable entry in the operation ledger.
///
/// `result` is computed exactly once at append time from the parent's
/// value and is never recomputed; the record is a snapshot of the
/// chain at that moment, not a live view.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationRecord {
    pub id: OperationId,
    pub thread_id: ThreadId,
    /// `None` means the parent is the thread root.
    pub parent_operation_id: Option<OperationId>,
    pub operator: Operator,
    pub operand: f64,
    pub result: f64,
    pub author_id: UserId,
    pub created_at: DateTime<Utc>,
}

impl OperationRecord {
    /// Creation-order sort key: `(created_at, id)` ascending. Used for
    /// sibling ordering during materialization.
    pub fn ledger_key(&self) -> (DateTime<Utc>, OperationId) {
        (self.created_at, self.id)
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    fn stamp(secs: i64) -> DateTime<Utc> {
        Utc.timestamp_opt(secs, 0).unwrap()
    }

    fn record(id: i64, secs: i64) -> OperationRecord {
        OperationRecord {
            id: OperationId(id),
            thread_id: ThreadId(1),
            parent_operation_id: None,
            operator: Operator::Add,
            operand: 1.0,
            result: 2.0,
            author_id: UserId(1),
            created_at: stamp(secs),
        }
    }

    #[test]
    fn ledger_key_orders_by_time_then_id() {
        let earlier = record(5, 100);
        let later = record(1, 200);
        assert!(earlier.ledger_key() < later.ledger_key());

        let tie_low = record(1, 100);
        let tie_high = record(2, 100);
        assert!(tie_low.ledger_key() < tie_high.ledger_key());
    }

    #[test]
    fn record_serializes_camel_case() {
        let json = serde_json::to_value(record(3, 100)).unwrap();
        assert_eq!(json["threadId"], 1);
        assert_eq!(json["parentOperationId"], serde_json::Value::Null);
        assert_eq!(json["operator"], "add");
        assert!(json.get("thread_id").is_none());
    }
}
