use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::UnknownOperator;

/// The kind of arithmetic step applied to a parent value.
///
/// Serializes as the lowercase tag used on the wire (`"add"`,
/// `"subtract"`, `"multiply"`, `"divide"`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Operator {
    /// `left + operand`
    Add,
    /// `left - operand`
    Subtract,
    /// `left * operand`
    Multiply,
    /// `left / operand`; rejects a zero operand.
    Divide,
}

impl Operator {
    /// All four operators, in tag order.
    pub const ALL: [Operator; 4] = [
        Operator::Add,
        Operator::Subtract,
        Operator::Multiply,
        Operator::Divide,
    ];

    /// The lowercase wire tag for this operator.
    pub fn tag(&self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Subtract => "subtract",
            Self::Multiply => "multiply",
            Self::Divide => "divide",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

impl FromStr for Operator {
    type Err = UnknownOperator;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "add" => Ok(Self::Add),
            "subtract" => Ok(Self::Subtract),
            "multiply" => Ok(Self::Multiply),
            "divide" => Ok(Self::Divide),
            other => Err(UnknownOperator(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tags_round_trip_through_from_str() {
        for op in Operator::ALL {
            assert_eq!(op.tag().parse::<Operator>().unwrap(), op);
        }
    }

    #[test]
    fn unknown_tag_is_rejected() {
        let err = "modulo".parse::<Operator>().unwrap_err();
        assert_eq!(err, UnknownOperator("modulo".into()));
        assert!(err.to_string().contains("modulo"));
    }

    #[test]
    fn tags_are_case_sensitive() {
        assert!("Add".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn serde_uses_lowercase_tags() {
        assert_eq!(serde_json::to_string(&Operator::Divide).unwrap(), "\"divide\"");
        let parsed: Operator = serde_json::from_str("\"multiply\"").unwrap();
        assert_eq!(parsed, Operator::Multiply);
    }
}
