use sqlx::QueryBuilder;

use crate::value::Value;
use crate::FilterResult;

#[cfg(feature = "postgres")]
pub mod postgres;
#[cfg(feature = "sqlite")]
pub mod sqlite;

/// A sqlx backend that rendered conditions can be bound into.
pub trait Database: sqlx::Database {
    /// Bind `value` at the current position of `builder`.
    ///
    /// Lists expand to comma-separated binds, see [crate::builder::push_list].
    /// Fails for values no bind type of the backend can hold.
    fn push_value<'args>(
        builder: &mut QueryBuilder<'args, Self>,
        value: &Value,
    ) -> FilterResult<()>;
}
