pub use crate::filter::Filterable;
pub use crate::operator::Operator;
pub use crate::query::{select, Select};
pub use crate::rule::Rule;
pub use crate::scope::Scope;
pub use crate::source::{FieldDescriptor, FilterSource};
pub use crate::value::{Presence, ToValue, Value};
pub use crate::{FilterError, FilterResult};
pub use tagfilter_macros::FilterSource;
