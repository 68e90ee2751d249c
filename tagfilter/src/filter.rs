use crate::value::Value;

/// The conditional-filter hook of a query.
///
/// `condition` uses `?` placeholders, one per entry in `params`.
pub trait Filterable {
    fn filter_where(&mut self, condition: &str, params: &[Value]);
}

impl<F: Filterable + ?Sized> Filterable for &mut F {
    fn filter_where(&mut self, condition: &str, params: &[Value]) {
        (**self).filter_where(condition, params);
    }
}
