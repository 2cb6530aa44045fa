//! Foundation types for the Tally operation ledger.
//!
//! This crate provides the identifiers, operator enum, and ledger row
//! types used throughout the Tally system. Every other Tally crate
//! depends on `tally-types`.
//!
//! # Key Types
//!
//! - [`UserId`] / [`ThreadId`] / [`OperationId`] — store-assigned
//!   monotonic integer identifiers
//! - [`Operator`] — the four arithmetic operation kinds
//! - [`Thread`] — root of an operation forest with its initial value
//! - [`OperationRecord`] — one immutable ledger entry
//! - [`User`] — author reference owned by the auth collaborator

pub mod error;
pub mod ids;
pub mod operator;
pub mod record;

pub use error::UnknownOperator;
pub use ids::{OperationId, ThreadId, UserId};
pub use operator::Operator;
pub use record::{OperationRecord, Thread, User};
