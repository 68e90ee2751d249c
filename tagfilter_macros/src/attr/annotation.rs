use syn::parse::ParseStream;

/// `#[filter = "opt:like;table:users"]`
pub struct Annotation(pub syn::LitStr);

impl syn::parse::Parse for Annotation {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() || !input.peek(syn::token::Eq) {
            return Err(input.error("Expected #[filter = \"opt:<operator>;...\"]"));
        }

        let _: syn::token::Eq = input.parse()?;
        Ok(Self(input.parse()?))
    }
}
