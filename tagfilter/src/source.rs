//!
//! Field metadata of filter structs, and rule extraction from it.
//!
//! A [FilterSource] describes each of its fields by serialization name, raw
//! annotation, current value and [Presence].
//! `#[derive(FilterSource)]` writes this for plain structs.
//!

use std::collections::HashMap;

use crate::rule::Rule;
use crate::value::{Presence, Value};
use crate::FilterResult;

/// Metadata and current value of one struct field.
#[derive(Clone, Debug, PartialEq)]
pub struct FieldDescriptor {
    name: &'static str,
    annotation: Option<&'static str>,
    value: Value,
    presence: Presence,
}

impl FieldDescriptor {
    /// Presence is taken from `value` until overridden with
    /// [FieldDescriptor::with_presence].
    pub fn new(name: &'static str, annotation: Option<&'static str>, value: Value) -> Self {
        Self {
            name,
            annotation,
            presence: value.presence(),
            value,
        }
    }

    pub fn with_presence(mut self, presence: Presence) -> Self {
        self.presence = presence;
        self
    }

    /// Serialization name, without `,omitempty`/`,optional` modifiers.
    pub fn name(&self) -> &'static str {
        strip_name_modifiers(self.name)
    }

    pub fn annotation(&self) -> Option<&'static str> {
        self.annotation
    }

    pub fn value(&self) -> &Value {
        &self.value
    }

    pub fn presence(&self) -> Presence {
        self.presence
    }

    pub fn into_value(self) -> Value {
        self.value
    }
}

/// A struct that can be turned into query conditions.
pub trait FilterSource {
    /// Descriptors of all fields, in declaration order.
    fn fields(&self) -> Vec<FieldDescriptor>;
}

/// No fields, so no rules.
impl FilterSource for () {
    fn fields(&self) -> Vec<FieldDescriptor> {
        vec![]
    }
}

impl<T: FilterSource + ?Sized> FilterSource for &T {
    fn fields(&self) -> Vec<FieldDescriptor> {
        (**self).fields()
    }
}

impl<T: FilterSource + ?Sized> FilterSource for Box<T> {
    fn fields(&self) -> Vec<FieldDescriptor> {
        (**self).fields()
    }
}

impl<T: FilterSource> FilterSource for Option<T> {
    fn fields(&self) -> Vec<FieldDescriptor> {
        match self {
            Some(source) => source.fields(),
            None => vec![],
        }
    }
}

/// A rule paired with the value of the field it was extracted from.
#[derive(Clone, Debug, PartialEq)]
pub struct BoundRule {
    pub rule: Rule,
    pub value: Value,
    pub presence: Presence,
}

/// Tag-driven extraction: one rule per annotated field, in declaration order.
///
/// Any malformed annotation aborts the whole extraction.
pub fn extract_rules<S>(source: &S) -> FilterResult<Vec<BoundRule>>
where
    S: FilterSource + ?Sized,
{
    let mut bound = vec![];

    for field in source.fields() {
        let annotation = match field.annotation() {
            Some(annotation) => annotation,
            None => continue,
        };

        if let Some(rule) = Rule::from_annotation(field.name().trim(), annotation)? {
            bound.push(BoundRule {
                rule,
                presence: field.presence(),
                value: field.into_value(),
            });
        }
    }

    Ok(bound)
}

/// Every named field, keyed by serialization name.
///
/// Used by explicit-rule mode, where annotations play no part. On duplicate
/// names the last field wins.
pub fn fields_by_name<S>(source: &S) -> HashMap<&'static str, FieldDescriptor>
where
    S: FilterSource + ?Sized,
{
    source
        .fields()
        .into_iter()
        .filter_map(|field| {
            let name = field.name().trim();
            if name.is_empty() {
                None
            } else {
                Some((name, field))
            }
        })
        .collect()
}

fn strip_name_modifiers(name: &str) -> &str {
    [",omitempty", ",optional"]
        .iter()
        .find_map(|modifier| name.find(modifier).map(|idx| &name[..idx]))
        .unwrap_or(name)
}
