use quote::quote;
use syn::ext::IdentExt;
use syn::parse::ParseStream;
use syn::spanned::Spanned;

use crate::attr::annotation::Annotation;
use crate::attr::attr_util;
use crate::attr::rename;

pub struct FilterStruct {
    pub item: syn::DeriveInput,
    pub fields: Vec<FilterField>,
}

pub struct FilterField {
    pub ident: syn::Ident,
    /// Resolved serialization name
    pub name: syn::LitStr,
    pub annotation: Option<syn::LitStr>,
}

impl syn::parse::Parse for FilterStruct {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let item: syn::DeriveInput = input.parse()?;

        let data = match &item.data {
            syn::Data::Struct(data) => data,
            _ => {
                return Err(syn::Error::new(
                    item.ident.span(),
                    "FilterSource can only be derived for structs",
                ))
            }
        };

        let rename_all = rename::container_rename_all(&item.attrs);

        let fields = match &data.fields {
            syn::Fields::Named(named) => named
                .named
                .iter()
                .map(|field| FilterField::from_field(field, rename_all))
                .collect::<syn::Result<Vec<_>>>()?,
            syn::Fields::Unit => vec![],
            syn::Fields::Unnamed(_) => {
                return Err(syn::Error::new(
                    data.fields.span(),
                    "Expected named fields",
                ))
            }
        };

        Ok(Self { item, fields })
    }
}

impl FilterField {
    fn from_field(field: &syn::Field, rename_all: Option<rename::RenameRule>) -> syn::Result<Self> {
        let ident = field
            .ident
            .clone()
            .ok_or_else(|| syn::Error::new(field.span(), "Expected a named field"))?;

        let name = match rename::field_rename(&field.attrs) {
            Some(name) => name,
            None => {
                let unraw = ident.unraw().to_string();
                match rename_all {
                    Some(rule) => rule.apply(&unraw),
                    None => unraw,
                }
            }
        };

        let annotation = match attr_util::find_unique_attr(&field.attrs, "filter")? {
            Some(attr) => {
                let annotation: Annotation = syn::parse2(attr.tokens.clone())
                    .map_err(|err| syn::Error::new(attr.span(), err.to_string()))?;
                Some(annotation.0)
            }
            None => None,
        };

        Ok(Self {
            name: syn::LitStr::new(&name, ident.span()),
            ident,
            annotation,
        })
    }
}

pub fn gen_filter_source(filter_struct: &FilterStruct) -> proc_macro2::TokenStream {
    let ident = &filter_struct.item.ident;
    let (impl_generics, ty_generics, where_clause) = filter_struct.item.generics.split_for_impl();

    let descriptors = filter_struct.fields.iter().map(|field| {
        let field_ident = &field.ident;
        let name = &field.name;
        let annotation = match &field.annotation {
            Some(lit) => quote! { ::std::option::Option::Some(#lit) },
            None => quote! { ::std::option::Option::None },
        };

        quote! {
            ::tagfilter::source::FieldDescriptor::new(
                #name,
                #annotation,
                ::tagfilter::value::ToValue::to_value(&self.#field_ident),
            )
            .with_presence(::tagfilter::value::ToValue::presence(&self.#field_ident))
        }
    });

    quote! {
        impl #impl_generics ::tagfilter::source::FilterSource for #ident #ty_generics #where_clause {
            fn fields(&self) -> ::std::vec::Vec<::tagfilter::source::FieldDescriptor> {
                ::std::vec![
                    #(#descriptors),*
                ]
            }
        }
    }
}
