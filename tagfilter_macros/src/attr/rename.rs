//!
//! Serialization names from `#[serde(...)]` attributes.
//!

use crate::attr::attr_util;

/// Container-level `rename_all` rule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RenameRule {
    LowerCase,
    UpperCase,
    PascalCase,
    CamelCase,
    SnakeCase,
    ScreamingSnakeCase,
    KebabCase,
    ScreamingKebabCase,
}

impl RenameRule {
    fn from_str(rule: &str) -> Option<Self> {
        match rule {
            "lowercase" => Some(Self::LowerCase),
            "UPPERCASE" => Some(Self::UpperCase),
            "PascalCase" => Some(Self::PascalCase),
            "camelCase" => Some(Self::CamelCase),
            "snake_case" => Some(Self::SnakeCase),
            "SCREAMING_SNAKE_CASE" => Some(Self::ScreamingSnakeCase),
            "kebab-case" => Some(Self::KebabCase),
            "SCREAMING-KEBAB-CASE" => Some(Self::ScreamingKebabCase),
            _ => None,
        }
    }

    /// Apply to a snake_case field name.
    pub fn apply(&self, field: &str) -> String {
        match self {
            Self::LowerCase | Self::SnakeCase => field.to_string(),
            Self::UpperCase | Self::ScreamingSnakeCase => field.to_ascii_uppercase(),
            Self::PascalCase => {
                let mut pascal = String::with_capacity(field.len());
                let mut capitalize = true;
                for c in field.chars() {
                    if c == '_' {
                        capitalize = true;
                    } else if capitalize {
                        pascal.push(c.to_ascii_uppercase());
                        capitalize = false;
                    } else {
                        pascal.push(c);
                    }
                }
                pascal
            }
            Self::CamelCase => {
                let pascal = Self::PascalCase.apply(field);
                let mut chars = pascal.chars();
                match chars.next() {
                    Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
                    None => pascal,
                }
            }
            Self::KebabCase => field.replace('_', "-"),
            Self::ScreamingKebabCase => field.to_ascii_uppercase().replace('_', "-"),
        }
    }
}

/// `#[serde(rename_all = "...")]` or `#[serde(rename_all(serialize = "..."))]`.
///
/// Rules serde does not know are left for serde to report.
pub fn container_rename_all(attrs: &[syn::Attribute]) -> Option<RenameRule> {
    serde_string(attrs, "rename_all").and_then(|rule| RenameRule::from_str(&rule))
}

/// `#[serde(rename = "...")]` or `#[serde(rename(serialize = "..."))]`.
pub fn field_rename(attrs: &[syn::Attribute]) -> Option<String> {
    serde_string(attrs, "rename")
}

fn serde_string(attrs: &[syn::Attribute], key: &str) -> Option<String> {
    attrs
        .iter()
        .filter(|attr| attr_util::attr_has_simple_ident(attr, "serde"))
        .filter_map(|attr| match attr.parse_meta() {
            Ok(syn::Meta::List(list)) => Some(list),
            _ => None,
        })
        .flat_map(|list| list.nested.into_iter())
        .find_map(|nested| match nested {
            syn::NestedMeta::Meta(syn::Meta::NameValue(nv)) if nv.path.is_ident(key) => {
                lit_string(&nv.lit)
            }
            syn::NestedMeta::Meta(syn::Meta::List(list)) if list.path.is_ident(key) => {
                list.nested.iter().find_map(|inner| match inner {
                    syn::NestedMeta::Meta(syn::Meta::NameValue(nv))
                        if nv.path.is_ident("serialize") =>
                    {
                        lit_string(&nv.lit)
                    }
                    _ => None,
                })
            }
            _ => None,
        })
}

fn lit_string(lit: &syn::Lit) -> Option<String> {
    match lit {
        syn::Lit::Str(s) => Some(s.value()),
        _ => None,
    }
}
