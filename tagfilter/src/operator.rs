//!
//! The closed set of comparison operators a rule can render.
//!

use std::fmt;
use std::str::FromStr;

use crate::FilterError;

/// Comparison operator of a [Rule](crate::rule::Rule).
///
/// The textual keys (`=`, `like`, `rlike`, ...) are what annotations use,
/// and they are case-sensitive.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `col = ?`
    #[default]
    Eq,
    /// `col like ?`, with the value wrapped as `%value%`
    Like,
    /// `col rlike ?`, matching semantics are up to the database
    Rlike,
    /// `col > ?`
    Gt,
    /// `col < ?`
    Lt,
    /// `col >= ?`
    Gte,
    /// `col <= ?`
    Lte,
    /// `col in (?)`, the value is a list expanded by the executor
    In,
    /// `col between ? and ?` over a pair of dates
    DateRange,
}

impl Operator {
    pub const ALL: [Operator; 9] = [
        Operator::Eq,
        Operator::Like,
        Operator::Rlike,
        Operator::Gt,
        Operator::Lt,
        Operator::Gte,
        Operator::Lte,
        Operator::In,
        Operator::DateRange,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Eq => "=",
            Self::Like => "like",
            Self::Rlike => "rlike",
            Self::Gt => ">",
            Self::Lt => "<",
            Self::Gte => ">=",
            Self::Lte => "<=",
            Self::In => "in",
            Self::DateRange => "date_range",
        }
    }
}

impl FromStr for Operator {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| FilterError::UnknownOperator(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
