//!
//! Rules, and parsing of the `filter` annotation grammar.
//!
//! An annotation is a list of `key:value` pairs separated by `;`:
//!
//! ```text
//! opt:<operator>;table:<name>;use_zero:<bool>
//! ```
//!

use std::borrow::Cow;

use crate::operator::Operator;
use crate::{FilterError, FilterResult};

/// Annotation marking a field as "not a rule source".
pub const EXCLUDE: &str = "-";

/// Descriptor of one predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Rule {
    name: String,
    opt: Operator,
    table: Option<String>,
    use_zero: bool,
}

impl Rule {
    pub fn new(name: impl Into<String>, opt: Operator) -> Self {
        Self {
            name: name.into(),
            opt,
            table: None,
            use_zero: false,
        }
    }

    /// Qualify the column with a table name, rendering `table.name`.
    pub fn table(mut self, table: impl Into<String>) -> Self {
        let table = table.into();
        self.table = if table.is_empty() { None } else { Some(table) };
        self
    }

    /// Render the rule even when its value is zero or empty.
    pub fn use_zero(mut self, use_zero: bool) -> Self {
        self.use_zero = use_zero;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn operator(&self) -> Operator {
        self.opt
    }

    pub fn qualifier(&self) -> Option<&str> {
        self.table.as_deref()
    }

    pub fn includes_zero(&self) -> bool {
        self.use_zero
    }

    /// The column reference as rendered into a fragment.
    pub fn column(&self) -> Cow<'_, str> {
        match &self.table {
            Some(table) => Cow::Owned(format!("{}.{}", table, self.name)),
            None => Cow::Borrowed(&self.name),
        }
    }

    /// Parse a field annotation into a rule named `name`.
    ///
    /// Returns `Ok(None)` for a blank annotation or [EXCLUDE].
    pub fn from_annotation(name: &str, annotation: &str) -> FilterResult<Option<Self>> {
        let annotation = annotation.trim_matches(|c| c == ' ' || c == ';' || c == ',');
        if annotation.is_empty() || annotation == EXCLUDE {
            return Ok(None);
        }

        let mut rule = Rule::new(name, Operator::Eq);

        for pair in annotation.split(';') {
            if pair.trim().is_empty() {
                continue;
            }

            // anything past a second `:` is dropped
            let mut parts = pair.split(':');
            let key = parts.next().unwrap_or_default();
            let value = parts
                .next()
                .ok_or_else(|| FilterError::MalformedAnnotation {
                    field: name.to_string(),
                    annotation: annotation.to_string(),
                })?
                .trim();

            match key.trim() {
                "opt" => {
                    rule.opt = if value.is_empty() {
                        Operator::Eq
                    } else {
                        value.parse()?
                    };
                }
                "table" => {
                    rule = rule.table(value);
                }
                // both naming conventions are accepted
                "use_zero" | "useZero" => {
                    rule.use_zero = parse_bool(value).ok_or_else(|| FilterError::InvalidFlag {
                        field: name.to_string(),
                        value: value.to_string(),
                    })?;
                }
                _ => {}
            }
        }

        Ok(Some(rule))
    }
}

fn parse_bool(s: &str) -> Option<bool> {
    match s {
        "1" | "t" | "T" | "TRUE" | "true" | "True" => Some(true),
        "0" | "f" | "F" | "FALSE" | "false" | "False" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(annotation: &str) -> FilterResult<Option<Rule>> {
        Rule::from_annotation("name", annotation)
    }

    #[test]
    fn full_annotation() {
        let rule = parse("opt:like;table:users;use_zero:true").unwrap().unwrap();

        assert_eq!(rule.operator(), Operator::Like);
        assert_eq!(rule.qualifier(), Some("users"));
        assert!(rule.includes_zero());
        assert_eq!(rule.column(), "users.name");
    }

    #[test]
    fn any_order_and_trimming() {
        let rule = parse(" ;useZero: 1 ; opt: >= ;").unwrap().unwrap();

        assert_eq!(rule, Rule::new("name", Operator::Gte).use_zero(true));
    }

    #[test]
    fn missing_opt_is_eq() {
        assert_eq!(
            parse("table:t").unwrap(),
            Some(Rule::new("name", Operator::Eq).table("t"))
        );
        assert_eq!(parse("opt:").unwrap(), Some(Rule::new("name", Operator::Eq)));
    }

    #[test]
    fn excluded_or_blank() {
        assert_eq!(parse("").unwrap(), None);
        assert_eq!(parse(" ; ").unwrap(), None);
        assert_eq!(parse("-").unwrap(), None);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        assert_eq!(
            parse("opt:in;color:red").unwrap(),
            Some(Rule::new("name", Operator::In))
        );
    }

    #[test]
    fn bad_flag_is_fatal() {
        assert_eq!(
            parse("opt:=;use_zero:yes"),
            Err(FilterError::InvalidFlag {
                field: "name".to_string(),
                value: "yes".to_string(),
            })
        );
    }

    #[test]
    fn bad_operator_is_fatal() {
        assert_eq!(
            parse("opt:~"),
            Err(FilterError::UnknownOperator("~".to_string()))
        );
    }

    #[test]
    fn extra_separators_keep_the_first_segment() {
        assert_eq!(
            parse("table:a:b;opt:>:x").unwrap(),
            Some(Rule::new("name", Operator::Gt).table("a"))
        );
    }

    #[test]
    fn pair_without_separator_is_fatal() {
        assert!(matches!(
            parse("opt:=;table"),
            Err(FilterError::MalformedAnnotation { .. })
        ));
    }
}
