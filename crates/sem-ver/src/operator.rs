//! Relational operators over version precedence

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Comparison operators between two versions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// Equal (==)
    Equal,
    /// Less than (<)
    LessThan,
    /// Less than or equal (<=)
    LessThanOrEqual,
    /// Greater than (>)
    GreaterThan,
    /// Greater than or equal (>=)
    GreaterThanOrEqual,
    /// Not equal (!=)
    NotEqual,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid operator: {0}")]
pub struct InvalidOperatorError(pub String);

impl Operator {
    /// Get the string representation of the operator
    pub fn as_str(&self) -> &'static str {
        match self {
            Operator::Equal => "==",
            Operator::LessThan => "<",
            Operator::LessThanOrEqual => "<=",
            Operator::GreaterThan => ">",
            Operator::GreaterThanOrEqual => ">=",
            Operator::NotEqual => "!=",
        }
    }

    /// Get all supported operator spellings
    pub fn supported_operators() -> &'static [&'static str] {
        &["=", "==", "<", "<=", ">", ">=", "!=", "<>"]
    }

    /// Whether a three-way comparison result satisfies this operator
    pub fn matches(&self, ordering: Ordering) -> bool {
        match self {
            Operator::Equal => ordering == Ordering::Equal,
            Operator::LessThan => ordering == Ordering::Less,
            Operator::LessThanOrEqual => ordering != Ordering::Greater,
            Operator::GreaterThan => ordering == Ordering::Greater,
            Operator::GreaterThanOrEqual => ordering != Ordering::Less,
            Operator::NotEqual => ordering != Ordering::Equal,
        }
    }
}

impl FromStr for Operator {
    type Err = InvalidOperatorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "=" | "==" => Ok(Operator::Equal),
            "<" => Ok(Operator::LessThan),
            "<=" => Ok(Operator::LessThanOrEqual),
            ">" => Ok(Operator::GreaterThan),
            ">=" => Ok(Operator::GreaterThanOrEqual),
            "!=" | "<>" => Ok(Operator::NotEqual),
            _ => Err(InvalidOperatorError(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
