//!
//! A minimal select query that scopes can be attached to.
//!

use std::fmt::Write;

use sqlx::QueryBuilder;

use crate::builder::push_condition;
use crate::database::Database;
use crate::filter::Filterable;
use crate::scope::Scope;
use crate::value::Value;
use crate::FilterResult;

/// `SELECT <columns> FROM <table> WHERE ...`
///
/// Every attached condition becomes one where-clause, and clauses are
/// combined with `AND`.
#[derive(Clone, Debug, PartialEq)]
pub struct Select {
    table: String,
    columns: Vec<String>,
    clauses: Vec<Clause>,
}

#[derive(Clone, Debug, PartialEq)]
struct Clause {
    sql: String,
    params: Vec<Value>,
}

pub fn select(table: impl Into<String>) -> Select {
    Select::new(table)
}

impl Select {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            table: table.into(),
            columns: vec![],
            clauses: vec![],
        }
    }

    pub fn columns<I, C>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    /// Apply a scope, builder style.
    pub fn scope(mut self, scope: &Scope) -> Self {
        scope.apply(&mut self);
        self
    }

    pub fn is_filtered(&self) -> bool {
        !self.clauses.is_empty()
    }

    /// The where-clause body, without the `WHERE` keyword.
    pub fn where_clause(&self) -> Option<String> {
        match self.clauses.as_slice() {
            [] => None,
            [single] => Some(single.sql.clone()),
            clauses => Some(
                clauses
                    .iter()
                    .map(|clause| format!("({})", clause.sql))
                    .collect::<Vec<_>>()
                    .join(" AND "),
            ),
        }
    }

    /// All bound parameters, in placeholder order.
    pub fn params(&self) -> Vec<Value> {
        self.clauses
            .iter()
            .flat_map(|clause| clause.params.iter().cloned())
            .collect()
    }

    /// The statement with `?` placeholders.
    pub fn to_sql(&self) -> String {
        let mut sql = self.head();
        if let Some(where_clause) = self.where_clause() {
            write!(sql, " WHERE {}", where_clause).ok();
        }
        sql
    }

    /// The statement as a sqlx query builder, with every parameter bound.
    pub fn to_query_builder<'args, DB>(&self) -> FilterResult<QueryBuilder<'args, DB>>
    where
        DB: Database,
        <DB as sqlx::Database>::Arguments<'args>: Default,
    {
        let mut builder = QueryBuilder::new(self.head());

        if !self.clauses.is_empty() {
            builder.push(" WHERE ");
        }

        let wrap = self.clauses.len() > 1;
        for (idx, clause) in self.clauses.iter().enumerate() {
            if idx > 0 {
                builder.push(" AND ");
            }
            if wrap {
                builder.push("(");
            }
            push_condition(&mut builder, &clause.sql, &clause.params)?;
            if wrap {
                builder.push(")");
            }
        }

        Ok(builder)
    }

    fn head(&self) -> String {
        let columns = if self.columns.is_empty() {
            "*".to_string()
        } else {
            self.columns.join(", ")
        };

        format!("SELECT {} FROM {}", columns, self.table)
    }
}

impl Filterable for Select {
    fn filter_where(&mut self, condition: &str, params: &[Value]) {
        self.clauses.push(Clause {
            sql: condition.to_string(),
            params: params.to_vec(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unfiltered() {
        let query = select("users").columns(["id", "name"]);

        assert!(!query.is_filtered());
        assert_eq!(query.to_sql(), "SELECT id, name FROM users");
        assert!(query.params().is_empty());
    }

    #[test]
    fn single_clause_is_not_wrapped() {
        let mut query = select("users");
        query.filter_where("a = ? OR b = ?", &[Value::Int(1), Value::Int(2)]);

        assert_eq!(query.to_sql(), "SELECT * FROM users WHERE a = ? OR b = ?");
    }

    #[test]
    fn clauses_are_anded() {
        let mut query = select("users");
        query.filter_where("a = ? OR b = ?", &[Value::Int(1), Value::Int(2)]);
        query.filter_where("c > ?", &[Value::Int(3)]);

        assert_eq!(
            query.to_sql(),
            "SELECT * FROM users WHERE (a = ? OR b = ?) AND (c > ?)"
        );
        assert_eq!(query.params(), vec![Value::Int(1), Value::Int(2), Value::Int(3)]);
    }

    #[cfg(feature = "postgres")]
    #[test]
    fn binds_into_sqlx() {
        let mut query = select("users");
        query.filter_where("a = ? OR b = ?", &[Value::Int(1), Value::Int(2)]);
        query.filter_where("c in (?)", &[Value::from(vec!["x", "y"])]);

        let builder = query.to_query_builder::<sqlx::Postgres>().unwrap();

        assert_eq!(
            builder.sql(),
            "SELECT * FROM users WHERE (a = $1 OR b = $2) AND (c in ($3, $4))"
        );
    }
}
