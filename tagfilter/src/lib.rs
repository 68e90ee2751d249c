//!
//! Parameterized query conditions from annotated structs.
//!
//! ```text
//! annotated struct ──> rules ─┐
//!                             ├─> skip policy ─> fragments ─> Scope ─> query
//! explicit rules ─────────────┘
//! ```
//!
//! A filter struct describes, field by field, how a user-supplied value
//! turns into a comparison:
//!
//! ```
//! use tagfilter::prelude::*;
//!
//! #[derive(FilterSource)]
//! struct UserFilter {
//!     #[filter = "opt:rlike"]
//!     name: String,
//!     #[filter = "opt:="]
//!     age: i32,
//! }
//!
//! let scope = tagfilter::build_from_struct(&UserFilter {
//!     name: "John".to_string(),
//!     age: 20,
//! })
//! .unwrap();
//!
//! let query = select("users").scope(&scope);
//! assert_eq!(query.to_sql(), "SELECT * FROM users WHERE name rlike ? AND age = ?");
//! ```
//!
//! Fields left at their zero value are skipped, so the same struct works as
//! a set of optional filters.
//!

extern crate self as tagfilter;

pub use tagfilter_macros::*;

pub mod builder;
pub mod database;
pub mod filter;
pub mod operator;
pub mod predicate;
pub mod prelude;
pub mod query;
pub mod rule;
pub mod source;
pub mod value;

mod logic;
mod scope;

pub use filter::Filterable;
pub use operator::Operator;
pub use rule::Rule;
pub use scope::Scope;
pub use source::FilterSource;
pub use value::{Presence, ToValue, Value};

use logic::Logic;
use predicate::SkipPolicy;

/// Build a conjunctive scope from the annotated fields of `dest`.
///
/// Rules come from `#[filter = "..."]` annotations, in field declaration
/// order. Zero values and empty lists are skipped unless the rule asks
/// for `use_zero`. An `Option` field holding `Some` is never skipped.
pub fn build_from_struct<S>(dest: &S) -> FilterResult<Scope>
where
    S: FilterSource + ?Sized,
{
    let bound = source::extract_rules(dest)?;

    let scope = Scope::render(
        Logic::And,
        SkipPolicy::ZeroOrEmpty,
        bound.iter().map(|b| (&b.rule, &b.value, b.presence)),
    )?;

    tracing::debug!(
        rules = bound.len(),
        params = scope.params().len(),
        "built scope from struct"
    );

    Ok(scope)
}

/// Build a conjunctive scope from explicit rules, taking values from `dest`.
///
/// Rules are matched to fields by serialization name; rules naming no
/// field are skipped. Only zero values are skipped here, empty lists
/// still render.
pub fn build_from_rules<S>(rules: &[Rule], dest: &S) -> FilterResult<Scope>
where
    S: FilterSource + ?Sized,
{
    if rules.is_empty() {
        return Ok(Scope::noop());
    }

    let fields = source::fields_by_name(dest);

    let bound = rules.iter().filter_map(|rule| match fields.get(rule.name()) {
        Some(field) => Some((rule, field.value(), field.presence())),
        None => {
            tracing::trace!(field = rule.name(), "no field for rule");
            None
        }
    });

    let scope = Scope::render(Logic::And, SkipPolicy::ZeroOnly, bound)?;

    tracing::debug!(
        rules = rules.len(),
        params = scope.params().len(),
        "built scope from rules"
    );

    Ok(scope)
}

/// Build a disjunctive scope matching `keyword` against every rule.
///
/// A blank keyword or an empty rule list gives a no-op scope.
pub fn build_multi_search(rules: &[Rule], keyword: &str) -> FilterResult<Scope> {
    let keyword = keyword.trim();
    if keyword.is_empty() || rules.is_empty() {
        return Ok(Scope::noop());
    }

    let value = Value::from(keyword);
    let scope = Scope::render(
        Logic::Or,
        SkipPolicy::Never,
        rules.iter().map(|rule| (rule, &value, Presence::Set)),
    )?;

    tracing::debug!(rules = rules.len(), "built keyword search scope");

    Ok(scope)
}

#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum FilterError {
    #[error("Invalid use_zero flag {value:?} on field '{field}'")]
    InvalidFlag { field: String, value: String },

    #[error("Malformed filter annotation {annotation:?} on field '{field}'")]
    MalformedAnnotation { field: String, annotation: String },

    #[error("Unknown operator {0:?}")]
    UnknownOperator(String),

    #[error("Operator '{operator}' on field '{field}' expects {expected}, found {found}")]
    TypeMismatch {
        field: String,
        operator: Operator,
        expected: &'static str,
        found: &'static str,
    },

    #[error("date_range on field '{field}' requires two dates, got {len}")]
    InvalidDateRange { field: String, len: usize },

    #[error("Integer {0} does not fit any bind type")]
    IntegerOverflow(u64),

    #[error("Condition has {placeholders} placeholders but {params} params")]
    PlaceholderMismatch { placeholders: usize, params: usize },
}

pub type FilterResult<T> = Result<T, FilterError>;
