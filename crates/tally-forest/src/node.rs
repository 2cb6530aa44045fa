use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use tally_types::{OperationId, OperationRecord, Operator, ThreadId, User};

/// Presentation view of one operation, with its author resolved and
/// its children nested.
///
/// Not persisted — built fresh on every materialization from the
/// immutable [`OperationRecord`] rows. Serializes camelCase to match
/// the wire shape the HTTP collaborator exposes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OperationNode {
    pub id: OperationId,
    pub thread_id: ThreadId,
    pub parent_operation_id: Option<OperationId>,
    pub operator: Operator,
    pub operand: f64,
    pub result: f64,
    pub created_at: DateTime<Utc>,
    pub author: User,
    pub children: Vec<OperationNode>,
}

impl OperationNode {
    /// Build a leaf node (empty children) from a ledger row and its
    /// resolved author.
    pub fn from_record(record: OperationRecord, author: User) -> Self {
        Self {
            id: record.id,
            thread_id: record.thread_id,
            parent_operation_id: record.parent_operation_id,
            operator: record.operator,
            operand: record.operand,
            result: record.result,
            created_at: record.created_at,
            author,
            children: Vec::new(),
        }
    }

    /// Creation-order sort key, matching
    /// [`OperationRecord::ledger_key`].
    pub fn ledger_key(&self) -> (DateTime<Utc>, OperationId) {
        (self.created_at, self.id)
    }

    /// Number of nodes in this subtree, this node included.
    pub fn subtree_len(&self) -> usize {
        1 + self.children.iter().map(OperationNode::subtree_len).sum::<usize>()
    }
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use tally_types::UserId;

    use super::*;

    fn author() -> User {
        User {
            id: UserId(1),
            username: "alice".into(),
            created_at: Utc.timestamp_opt(0, 0).unwrap(),
        }
    }

    fn record(id: i64) -> OperationRecord {
        OperationRecord {
            id: OperationId(id),
            thread_id: ThreadId(1),
            parent_operation_id: None,
            operator: Operator::Multiply,
            operand: 2.0,
            result: 20.0,
            author_id: UserId(1),
            created_at: Utc.timestamp_opt(100, 0).unwrap(),
        }
    }

    #[test]
    fn from_record_starts_with_no_children() {
        let node = OperationNode::from_record(record(1), author());
        assert!(node.children.is_empty());
        assert_eq!(node.subtree_len(), 1);
        assert_eq!(node.result, 20.0);
        assert_eq!(node.author.username, "alice");
    }

    #[test]
    fn subtree_len_counts_nested_children() {
        let mut root = OperationNode::from_record(record(1), author());
        let mut mid = OperationNode::from_record(record(2), author());
        mid.children.push(OperationNode::from_record(record(3), author()));
        root.children.push(mid);
        root.children.push(OperationNode::from_record(record(4), author()));
        assert_eq!(root.subtree_len(), 4);
    }

    #[test]
    fn serializes_camel_case_with_nested_children() {
        let mut root = OperationNode::from_record(record(1), author());
        root.children.push(OperationNode::from_record(record(2), author()));
        let json = serde_json::to_value(&root).unwrap();
        assert_eq!(json["threadId"], 1);
        assert_eq!(json["children"][0]["id"], 2);
        assert_eq!(json["author"]["username"], "alice");
    }
}
