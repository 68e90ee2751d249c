pub fn attr_has_simple_ident(attr: &syn::Attribute, name: &str) -> bool {
    let path = &attr.path;
    if path.leading_colon.is_some() || path.segments.len() != 1 {
        return false;
    }

    let segment = path.segments.last().unwrap();

    segment.ident == name
}

/// Find the single attribute named `name`, rejecting duplicates.
pub fn find_unique_attr<'a>(
    attrs: &'a [syn::Attribute],
    name: &str,
) -> syn::Result<Option<&'a syn::Attribute>> {
    let mut found: Option<&syn::Attribute> = None;

    for attr in attrs {
        if !attr_has_simple_ident(attr, name) {
            continue;
        }

        if found.is_some() {
            return Err(syn::Error::new_spanned(
                attr,
                format!("Duplicate #[{}] attribute", name),
            ));
        }

        found = Some(attr);
    }

    Ok(found)
}
