use thiserror::Error;

/// An operator tag that does not name one of the four arithmetic
/// operations.
///
/// [`Operator`](crate::Operator) is a closed enum, so this error can
/// only arise at the parse boundary where callers hand over string
/// tags. It is kept as a distinct, inspectable kind rather than a
/// panic because corrupt rows in a foreign store can still carry
/// arbitrary tags.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown operator: {0:?}")]
pub struct UnknownOperator(pub String);
