#![forbid(unsafe_code)]

extern crate proc_macro;

mod derive_filter_source;

mod attr {
    pub mod annotation;
    pub mod attr_util;
    pub mod rename;
}

use proc_macro::TokenStream;

/// Derive `tagfilter::FilterSource` for a struct with named fields.
///
/// Each field may carry a `#[filter = "..."]` annotation:
///
/// ```ignore
/// #[derive(FilterSource)]
/// struct UserFilter {
///     #[filter = "opt:like;table:users"]
///     name: String,
///     #[filter = "opt:>=;use_zero:true"]
///     age: i32,
///     #[filter = "-"]
///     page: u32,
/// }
/// ```
///
/// The serialization name of a field follows `#[serde(rename)]` and the
/// container's `#[serde(rename_all)]`, falling back to the field name.
#[proc_macro_derive(FilterSource, attributes(filter))]
pub fn derive_filter_source(input: TokenStream) -> TokenStream {
    let filter_struct = syn::parse_macro_input!(input as derive_filter_source::FilterStruct);

    let tokens = derive_filter_source::gen_filter_source(&filter_struct);

    TokenStream::from(tokens)
}
