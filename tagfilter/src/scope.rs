//!
//! The built, immutable query transform.
//!

use crate::filter::Filterable;
use crate::logic::{self, Logic};
use crate::predicate::{self, Fragment, SkipPolicy};
use crate::rule::Rule;
use crate::value::{Presence, Value};
use crate::FilterResult;

/// A rendered condition, ready to attach to any number of queries.
///
/// A scope that rendered no fragments is a no-op: applying it leaves the
/// query untouched.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Scope {
    condition: Option<Condition>,
}

#[derive(Clone, Debug, PartialEq)]
struct Condition {
    sql: String,
    params: Vec<Value>,
}

impl Scope {
    pub fn noop() -> Self {
        Self::default()
    }

    /// Render every active `(rule, value, presence)` triple and join the
    /// fragments.
    pub(crate) fn render<'a, I>(logic: Logic, policy: SkipPolicy, bound: I) -> FilterResult<Self>
    where
        I: IntoIterator<Item = (&'a Rule, &'a Value, Presence)>,
    {
        let mut fragments: Vec<Fragment> = vec![];

        for (rule, value, presence) in bound {
            if policy.skips(rule, presence) {
                tracing::trace!(field = rule.name(), "skipping zero value");
                continue;
            }

            fragments.push(predicate::render(rule, value)?);
        }

        let condition =
            logic::assemble(logic, fragments).map(|(sql, params)| Condition { sql, params });

        Ok(Self { condition })
    }

    pub fn is_noop(&self) -> bool {
        self.condition.is_none()
    }

    /// The joined condition, `None` for a no-op scope.
    pub fn condition(&self) -> Option<&str> {
        self.condition.as_ref().map(|c| c.sql.as_str())
    }

    pub fn params(&self) -> &[Value] {
        match &self.condition {
            Some(condition) => &condition.params,
            None => &[],
        }
    }

    /// Attach the condition to `target` in a single call.
    pub fn apply<F: Filterable + ?Sized>(&self, target: &mut F) {
        if let Some(condition) = &self.condition {
            target.filter_where(&condition.sql, &condition.params);
        }
    }
}
