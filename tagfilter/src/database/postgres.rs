use sqlx::{Postgres, QueryBuilder};

use super::Database;
use crate::builder::push_list;
use crate::value::Value;
use crate::{FilterError, FilterResult};

impl Database for Postgres {
    fn push_value<'args>(
        builder: &mut QueryBuilder<'args, Self>,
        value: &Value,
    ) -> FilterResult<()> {
        match value {
            Value::Null => {
                builder.push_bind(None::<String>);
            }
            Value::Bool(b) => {
                builder.push_bind(*b);
            }
            Value::Int(i) => {
                builder.push_bind(*i);
            }
            Value::UInt(u) => return Err(FilterError::IntegerOverflow(*u)),
            Value::Float(f) => {
                builder.push_bind(*f);
            }
            Value::Text(s) => {
                builder.push_bind(s.clone());
            }
            Value::List(items) => return push_list(builder, items),
        }
        Ok(())
    }
}
