//!
//! Dynamically typed parameter values.
//!
//! Struct fields are snapshotted into [Value]s when a scope is built,
//! so the rendered parameters no longer borrow from the source.
//!

use std::borrow::Cow;
use std::fmt;

/// A bound parameter.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    /// An unsigned integer above `i64::MAX`.
    UInt(u64),
    Float(f64),
    Text(String),
    List(Vec<Value>),
}

impl Value {
    /// Whether this is the zero value of its type.
    ///
    /// Lists are never zero, see [Value::is_empty_list].
    pub fn is_zero(&self) -> bool {
        match self {
            Self::Null => true,
            Self::Bool(b) => !b,
            Self::Int(i) => *i == 0,
            Self::UInt(_) => false,
            // negative zero counts as a set value
            Self::Float(f) => f.to_bits() == 0,
            Self::Text(s) => s.is_empty(),
            Self::List(_) => false,
        }
    }

    pub fn is_empty_list(&self) -> bool {
        matches!(self, Self::List(items) if items.is_empty())
    }

    pub fn presence(&self) -> Presence {
        if self.is_zero() {
            Presence::Zero
        } else if self.is_empty_list() {
            Presence::EmptyList
        } else {
            Presence::Set
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Self::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn kind(&self) -> &'static str {
        match self {
            Self::Null => "null",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::UInt(_) => "uint",
            Self::Float(_) => "float",
            Self::Text(_) => "text",
            Self::List(_) => "list",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("NULL"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Int(i) => write!(f, "{}", i),
            Self::UInt(u) => write!(f, "{}", u),
            Self::Float(v) => write!(f, "{}", v),
            Self::Text(s) => write!(f, "'{}'", s),
            Self::List(items) => {
                f.write_str("[")?;
                for (idx, item) in items.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                f.write_str("]")
            }
        }
    }
}

/// Whether a field holds a value worth filtering on.
///
/// Decided on the field itself rather than its [Value], so `Some(0)`
/// stays [Presence::Set] even though it converts to the zero `Int(0)`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Presence {
    Zero,
    EmptyList,
    Set,
}

/// Conversion of a struct field into a [Value].
///
/// `#[derive(FilterSource)]` requires every field type to implement this.
pub trait ToValue {
    fn to_value(&self) -> Value;

    fn presence(&self) -> Presence {
        self.to_value().presence()
    }
}

impl ToValue for Value {
    fn to_value(&self) -> Value {
        self.clone()
    }
}

macro_rules! int_to_value {
    ($($ty:ty),*) => {
        $(
            impl ToValue for $ty {
                fn to_value(&self) -> Value {
                    Value::Int(i64::from(*self))
                }
            }

            impl From<$ty> for Value {
                fn from(v: $ty) -> Self {
                    Value::Int(i64::from(v))
                }
            }
        )*
    };
}

int_to_value!(i8, i16, i32, i64, u8, u16, u32);

// Values above i64::MAX are kept as `UInt`.
impl ToValue for u64 {
    fn to_value(&self) -> Value {
        match i64::try_from(*self) {
            Ok(i) => Value::Int(i),
            Err(_) => Value::UInt(*self),
        }
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        v.to_value()
    }
}

impl ToValue for usize {
    fn to_value(&self) -> Value {
        (*self as u64).to_value()
    }
}

impl From<usize> for Value {
    fn from(v: usize) -> Self {
        v.to_value()
    }
}

impl ToValue for isize {
    fn to_value(&self) -> Value {
        Value::Int(*self as i64)
    }
}

impl From<isize> for Value {
    fn from(v: isize) -> Self {
        Value::Int(v as i64)
    }
}

impl ToValue for f32 {
    fn to_value(&self) -> Value {
        Value::Float(f64::from(*self))
    }
}

impl ToValue for f64 {
    fn to_value(&self) -> Value {
        Value::Float(*self)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl ToValue for bool {
    fn to_value(&self) -> Value {
        Value::Bool(*self)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl ToValue for char {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for str {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl ToValue for String {
    fn to_value(&self) -> Value {
        Value::Text(self.clone())
    }
}

impl ToValue for Cow<'_, str> {
    fn to_value(&self) -> Value {
        Value::Text(self.to_string())
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl<T: ToValue> ToValue for Option<T> {
    fn to_value(&self) -> Value {
        match self {
            Some(v) => v.to_value(),
            None => Value::Null,
        }
    }

    /// `Some` is set, whatever it holds.
    fn presence(&self) -> Presence {
        match self {
            Some(_) => Presence::Set,
            None => Presence::Zero,
        }
    }
}

impl<T: ToValue> ToValue for [T] {
    fn to_value(&self) -> Value {
        Value::List(self.iter().map(ToValue::to_value).collect())
    }

    fn presence(&self) -> Presence {
        if self.is_empty() {
            Presence::EmptyList
        } else {
            Presence::Set
        }
    }
}

impl<T: ToValue, const N: usize> ToValue for [T; N] {
    fn to_value(&self) -> Value {
        self[..].to_value()
    }

    fn presence(&self) -> Presence {
        self[..].presence()
    }
}

impl<T: ToValue> ToValue for Vec<T> {
    fn to_value(&self) -> Value {
        self[..].to_value()
    }

    fn presence(&self) -> Presence {
        self[..].presence()
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: ToValue + ?Sized> ToValue for &T {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn presence(&self) -> Presence {
        (**self).presence()
    }
}

impl<T: ToValue + ?Sized> ToValue for Box<T> {
    fn to_value(&self) -> Value {
        (**self).to_value()
    }

    fn presence(&self) -> Presence {
        (**self).presence()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_values() {
        assert!(Value::Null.is_zero());
        assert!(0_i32.to_value().is_zero());
        assert!(String::new().to_value().is_zero());
        assert!(false.to_value().is_zero());
        assert!(0.0_f64.to_value().is_zero());
        assert!(None::<i32>.to_value().is_zero());

        assert!(!(-0.0_f64).to_value().is_zero());
        assert!(!"x".to_value().is_zero());
    }

    #[test]
    fn some_is_set_even_when_zero() {
        assert_eq!(Some(0).presence(), Presence::Set);
        assert_eq!(Some(false).presence(), Presence::Set);
        assert_eq!(Some(String::new()).presence(), Presence::Set);
        assert_eq!(Some(Vec::<i32>::new()).presence(), Presence::Set);
        assert_eq!(None::<i32>.presence(), Presence::Zero);

        // the bound value is still the inner one
        assert_eq!(Some(0).to_value(), Value::Int(0));
    }

    #[test]
    fn presence_of_plain_fields() {
        assert_eq!(0_i32.presence(), Presence::Zero);
        assert_eq!(3_i32.presence(), Presence::Set);
        assert_eq!(String::new().presence(), Presence::Zero);
        assert_eq!(Vec::<String>::new().presence(), Presence::EmptyList);
        assert_eq!(vec![1].presence(), Presence::Set);
        assert_eq!(Box::new(Some(0)).presence(), Presence::Set);
    }

    #[test]
    fn lists_are_not_zero() {
        let empty: Vec<String> = vec![];
        assert!(!empty.to_value().is_zero());
        assert!(empty.to_value().is_empty_list());
        assert!(!vec![1].to_value().is_empty_list());
    }

    #[test]
    fn wide_ints_keep_their_value() {
        assert_eq!(u64::MAX.to_value(), Value::UInt(u64::MAX));
        assert_eq!((i64::MAX as u64).to_value(), Value::Int(i64::MAX));
        assert_eq!(7_usize.to_value(), Value::Int(7));
        assert_eq!(u64::MAX.presence(), Presence::Set);
    }

    #[test]
    fn nested_conversion() {
        let value = Some(vec!["a", "b"]).to_value();
        assert_eq!(
            value,
            Value::List(vec![Value::Text("a".into()), Value::Text("b".into())])
        );
        assert_eq!(value.to_string(), "['a', 'b']");
    }
}
