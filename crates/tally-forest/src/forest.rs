use std::collections::HashMap;

use tracing::warn;

use crate::node::OperationNode;

/// Reconstruct the operation forest for one thread from its flat,
/// parent-pointer rows.
///
/// Input nodes carry empty `children`; the output holds only the
/// root-level nodes (`parent_operation_id` is `None`), with every
/// other node nested under its parent. Sibling order — in the roots
/// list and in every `children` list — is creation order,
/// `(created_at, id)` ascending.
///
/// A node whose parent id resolves to nothing in the input set (a
/// cross-thread reference that slipped past the ledger, or store
/// corruption) is dropped from the output together with its subtree,
/// rather than surfaced as a root. Presenting a chain whose base
/// value is unknown would be worse than omitting it; the drop is
/// logged and never panics.
pub fn build_forest(mut nodes: Vec<OperationNode>) -> Vec<OperationNode> {
    nodes.sort_by_key(OperationNode::ledger_key);

    let index_by_id: HashMap<_, _> = nodes
        .iter()
        .enumerate()
        .map(|(index, node)| (node.id, index))
        .collect();

    let mut child_indices: Vec<Vec<usize>> = vec![Vec::new(); nodes.len()];
    let mut root_indices = Vec::new();

    for (index, node) in nodes.iter().enumerate() {
        match node.parent_operation_id {
            None => root_indices.push(index),
            Some(parent) => match index_by_id.get(&parent) {
                Some(&parent_index) if parent_index != index => {
                    child_indices[parent_index].push(index);
                }
                _ => {
                    warn!(
                        operation = %node.id,
                        parent = %parent,
                        "dropping operation with dangling parent"
                    );
                }
            },
        }
    }

    // Linkage must not depend on where the sort placed a parent
    // relative to its children (a store clock regression can stamp a
    // child before its parent). A DFS from the roots records each
    // tree in visit order; attaching children in reverse of that
    // order builds every subtree bottom-up. Each node has one parent,
    // so the walk visits a node at most once and cycles in corrupt
    // input are simply never reached.
    let mut visit_order = Vec::with_capacity(nodes.len());
    let mut pending = root_indices.clone();
    while let Some(index) = pending.pop() {
        visit_order.push(index);
        pending.extend(child_indices[index].iter().copied());
    }

    let mut slots: Vec<Option<OperationNode>> = nodes.into_iter().map(Some).collect();
    for &index in visit_order.iter().rev() {
        let children: Vec<OperationNode> = child_indices[index]
            .iter()
            .filter_map(|&child| slots[child].take())
            .collect();
        if let Some(node) = slots[index].as_mut() {
            node.children = children;
        }
    }

    root_indices
        .into_iter()
        .filter_map(|index| slots[index].take())
        .collect()
}
