use crate::predicate::Fragment;
use crate::value::Value;

/// How rendered fragments combine.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Logic {
    And,
    Or,
}

impl Logic {
    fn joiner(&self) -> &'static str {
        match self {
            Self::And => " AND ",
            Self::Or => " OR ",
        }
    }
}

/// Join fragments into one condition, or `None` when there is nothing to join.
pub fn assemble(logic: Logic, fragments: Vec<Fragment>) -> Option<(String, Vec<Value>)> {
    if fragments.is_empty() {
        return None;
    }

    let mut clauses = Vec::with_capacity(fragments.len());
    let mut params = vec![];

    for fragment in fragments {
        clauses.push(fragment.sql);
        params.extend(fragment.params);
    }

    Some((clauses.join(logic.joiner()), params))
}
