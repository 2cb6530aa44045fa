//! Append-only ledger storage for Tally.
//!
//! This crate defines the [`LedgerStore`] trait — the seam between the
//! engine and whatever persistence technology hosts the three
//! relations (users, threads, operations) — plus an
//! [`InMemoryStore`] backend for tests, demos, and embedding.
//!
//! # Design Rules
//!
//! 1. Rows are immutable once written; the operations relation is
//!    append-only.
//! 2. Ids are assigned by the store, monotonically increasing per
//!    relation.
//! 3. Mutating calls are durable before they return — no buffered
//!    writes that a crash could lose.
//! 4. Missing rows are `Ok(None)`, never an error; errors mean the
//!    backend itself is unavailable.

pub mod error;
pub mod memory;
pub mod traits;

pub use error::{StoreError, StoreResult};
pub use memory::InMemoryStore;
pub use traits::{LedgerStore, NewOperation};
