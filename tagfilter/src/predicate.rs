//!
//! Rendering of single rules into parameterized comparison fragments.
//!

use crate::operator::Operator;
use crate::rule::Rule;
use crate::value::{Presence, Value};
use crate::{FilterError, FilterResult};

/// Appended to the first date of a `date_range` rule.
pub const DAY_START: &str = " 00:00:00";

/// Appended to the second date of a `date_range` rule.
pub const DAY_END: &str = " 23:59:59";

/// One rendered comparison.
///
/// `params` holds one value per `?` in `sql`.
#[derive(Clone, Debug, PartialEq)]
pub struct Fragment {
    pub sql: String,
    pub params: Vec<Value>,
}

impl Fragment {
    fn new(sql: String, params: Vec<Value>) -> Self {
        Self { sql, params }
    }
}

/// Which values make a rule inactive when it does not ask for zero values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SkipPolicy {
    /// Zero values and empty lists, used for annotated structs.
    ZeroOrEmpty,
    /// Zero values only. Empty lists still render.
    ZeroOnly,
    /// Every rule renders.
    Never,
}

impl SkipPolicy {
    pub fn skips(&self, rule: &Rule, presence: Presence) -> bool {
        if rule.includes_zero() {
            return false;
        }

        match self {
            Self::ZeroOrEmpty => presence != Presence::Set,
            Self::ZeroOnly => presence == Presence::Zero,
            Self::Never => false,
        }
    }
}

/// Render `rule` against `value`.
pub fn render(rule: &Rule, value: &Value) -> FilterResult<Fragment> {
    let column = rule.column();

    let compare = |op: &str| Fragment::new(format!("{} {} ?", column, op), vec![value.clone()]);

    Ok(match rule.operator() {
        Operator::Eq => compare("="),
        Operator::Gt => compare(">"),
        Operator::Lt => compare("<"),
        Operator::Gte => compare(">="),
        Operator::Lte => compare("<="),
        Operator::Rlike => compare("rlike"),
        Operator::Like => {
            let text = value.as_text().ok_or_else(|| FilterError::TypeMismatch {
                field: rule.name().to_string(),
                operator: Operator::Like,
                expected: "text",
                found: value.kind(),
            })?;

            Fragment::new(
                format!("{} like ?", column),
                vec![Value::Text(format!("%{}%", text))],
            )
        }
        Operator::In => Fragment::new(format!("{} in (?)", column), vec![value.clone()]),
        Operator::DateRange => {
            let (start, end) = date_bounds(rule, value)?;

            Fragment::new(
                format!("{} between ? and ?", column),
                vec![
                    Value::Text(format!("{}{}", start, DAY_START)),
                    Value::Text(format!("{}{}", end, DAY_END)),
                ],
            )
        }
    })
}

fn date_bounds<'v>(rule: &Rule, value: &'v Value) -> FilterResult<(&'v str, &'v str)> {
    let invalid = |len| FilterError::InvalidDateRange {
        field: rule.name().to_string(),
        len,
    };

    match value.as_list() {
        Some([start, end]) => match (start.as_text(), end.as_text()) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(invalid(2)),
        },
        Some(items) => Err(invalid(items.len())),
        None => Err(invalid(1)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fragment(rule: Rule, value: impl Into<Value>) -> Fragment {
        render(&rule, &value.into()).unwrap()
    }

    #[test]
    fn comparisons() {
        let cases = [
            (Operator::Eq, "age = ?"),
            (Operator::Gt, "age > ?"),
            (Operator::Lt, "age < ?"),
            (Operator::Gte, "age >= ?"),
            (Operator::Lte, "age <= ?"),
            (Operator::Rlike, "age rlike ?"),
        ];

        for (op, sql) in cases {
            assert_eq!(
                fragment(Rule::new("age", op), 20),
                Fragment::new(sql.to_string(), vec![Value::Int(20)])
            );
        }
    }

    #[test]
    fn qualified_column() {
        let f = fragment(Rule::new("name", Operator::Eq).table("users"), "John");
        assert_eq!(f.sql, "users.name = ?");
    }

    #[test]
    fn like_wraps_text() {
        let f = fragment(Rule::new("name", Operator::Like), "oh");
        assert_eq!(f.sql, "name like ?");
        assert_eq!(f.params, vec![Value::from("%oh%")]);
    }

    #[test]
    fn like_requires_text() {
        let err = render(&Rule::new("age", Operator::Like), &Value::Int(3)).unwrap_err();
        assert_eq!(
            err,
            FilterError::TypeMismatch {
                field: "age".to_string(),
                operator: Operator::Like,
                expected: "text",
                found: "int",
            }
        );
    }

    #[test]
    fn in_keeps_the_list_as_one_param() {
        let f = fragment(Rule::new("id", Operator::In), vec![1, 2, 3]);
        assert_eq!(f.sql, "id in (?)");
        assert_eq!(f.params, vec![Value::from(vec![1, 2, 3])]);
    }

    #[test]
    fn date_range_bounds_whole_days() {
        let f = fragment(
            Rule::new("created_at", Operator::DateRange),
            vec!["2024-01-01", "2024-01-31"],
        );
        assert_eq!(f.sql, "created_at between ? and ?");
        assert_eq!(
            f.params,
            vec![
                Value::from("2024-01-01 00:00:00"),
                Value::from("2024-01-31 23:59:59"),
            ]
        );
    }

    #[test]
    fn date_range_needs_exactly_two_dates() {
        let rule = Rule::new("created_at", Operator::DateRange);

        for (value, len) in [
            (Value::from(vec!["2024-01-01"]), 1),
            (Value::from(vec!["a", "b", "c"]), 3),
            (Value::from(vec![1, 2]), 2),
            (Value::from("2024-01-01"), 1),
        ] {
            assert_eq!(
                render(&rule, &value),
                Err(FilterError::InvalidDateRange {
                    field: "created_at".to_string(),
                    len,
                })
            );
        }
    }

    #[test]
    fn skip_policies() {
        let rule = Rule::new("tags", Operator::In);
        let empty = Presence::EmptyList;

        assert!(SkipPolicy::ZeroOrEmpty.skips(&rule, empty));
        assert!(!SkipPolicy::ZeroOnly.skips(&rule, empty));
        assert!(SkipPolicy::ZeroOnly.skips(&rule, Presence::Zero));
        assert!(!SkipPolicy::Never.skips(&rule, Presence::Zero));
        assert!(!SkipPolicy::ZeroOrEmpty.skips(&rule, Presence::Set));

        let rule = rule.use_zero(true);
        assert!(!SkipPolicy::ZeroOrEmpty.skips(&rule, empty));
        assert!(!SkipPolicy::ZeroOnly.skips(&rule, Presence::Zero));
    }
}
