//! Tree materialization for the Tally operation ledger.
//!
//! The ledger stores operations as a flat, append-only list with
//! parent pointers. This crate reconstructs the presentation form: an
//! ordered forest of [`OperationNode`]s per thread, roots first,
//! children nested.
//!
//! Materialization is pure and restartable — no state survives
//! between calls; each call rebuilds the forest from the full row set
//! in two linear passes (arena of nodes indexed by id, children lists
//! populated in a second pass). Cost is O(n) in the number of
//! operations, independent of tree depth or branching factor.

pub mod forest;
pub mod node;

pub use forest::build_forest;
pub use node::OperationNode;
