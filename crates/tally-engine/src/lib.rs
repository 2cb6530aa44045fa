//! Core engine for the Tally operation ledger.
//!
//! This crate is the heart of Tally. It provides:
//! - Pure arithmetic evaluation over the four operators ([`eval`])
//! - The [`LedgerEngine`] façade orchestrating evaluator, store, and
//!   tree materializer behind two public flows:
//!   - **write**: [`LedgerEngine::append`] resolves the parent's
//!     value, applies the operator, and persists one immutable record
//!   - **read**: [`LedgerEngine::materialize`] rebuilds the full
//!     forest of operation trees per thread for presentation
//! - [`ThreadTree`], the presentation view of a thread
//! - [`EngineError`], the distinct, inspectable failure kinds
//!
//! The engine assumes its caller has already authenticated the acting
//! user and type-checked the inputs; it owns only the arithmetic
//! chain and tree-shape logic plus their invariants.

pub mod engine;
pub mod error;
pub mod eval;

pub use engine::{LedgerEngine, ThreadTree};
pub use error::EngineError;
