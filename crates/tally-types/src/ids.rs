use std::fmt;

use serde::{Deserialize, Serialize};

macro_rules! ledger_id {
    ($(#[$doc:meta])* $name:ident, $tag:literal) => {
        $(#[$doc])*
        #[derive(
            Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(pub i64);

        impl $name {
            /// The raw integer value as assigned by the store.
            pub fn value(&self) -> i64 {
                self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, concat!($tag, "#{}"), self.0)
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl From<$name> for i64 {
            fn from(id: $name) -> Self {
                id.0
            }
        }
    };
}

ledger_id!(
    /// Identifier of a user row, assigned by the store.
    ///
    /// The user entity itself is owned by the auth collaborator; the
    /// ledger only ever references it by id.
    UserId,
    "user"
);

ledger_id!(
    /// Identifier of a thread, the root of an operation forest.
    ThreadId,
    "thread"
);

ledger_id!(
    /// Identifier of a single operation record in the ledger.
    OperationId,
    "op"
);
