//!
//! Binding of `?`-style conditions into a [sqlx::QueryBuilder].
//!

use sqlx::QueryBuilder;

use crate::database::Database;
use crate::value::Value;
use crate::{FilterError, FilterResult};

/// Push `condition` onto `builder`, binding one value per `?`.
///
/// The backend decides how placeholders look (`?` or `$n`).
pub fn push_condition<'args, DB: Database>(
    builder: &mut QueryBuilder<'args, DB>,
    condition: &str,
    params: &[Value],
) -> FilterResult<()> {
    let placeholders = condition.matches('?').count();
    if placeholders != params.len() {
        return Err(FilterError::PlaceholderMismatch {
            placeholders,
            params: params.len(),
        });
    }

    let mut pieces = condition.split('?');
    if let Some(head) = pieces.next() {
        builder.push(head);
    }

    for (piece, value) in pieces.zip(params) {
        DB::push_value(builder, value)?;
        builder.push(piece);
    }

    Ok(())
}

/// Bind every item of a list, comma separated.
///
/// An empty list becomes `NULL`, so `col in (NULL)` matches nothing.
pub fn push_list<'args, DB: Database>(
    builder: &mut QueryBuilder<'args, DB>,
    items: &[Value],
) -> FilterResult<()> {
    if items.is_empty() {
        builder.push("NULL");
        return Ok(());
    }

    for (idx, item) in items.iter().enumerate() {
        if idx > 0 {
            builder.push(", ");
        }
        DB::push_value(builder, item)?;
    }

    Ok(())
}
