use proc_macro::TokenStream as StdTokenStream;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{parse2, Error, LitStr, Result};

/// Validates a string literal as a resource identifier and expands to the
/// normalized `namespace:value` literal.
#[proc_macro]
pub fn parse_ident_str(item: StdTokenStream) -> StdTokenStream {
    parse_ident_str_inner(item.into())
        .unwrap_or_else(Error::into_compile_error)
        .into()
}

fn parse_ident_str_inner(item: TokenStream) -> Result<TokenStream> {
    let lit: LitStr = parse2(item)?;

    match normalize(&lit.value()) {
        Ok(ident) => Ok(quote!(#ident)),
        Err(msg) => Err(Error::new(lit.span(), msg)),
    }
}

fn normalize(s: &str) -> std::result::Result<String, &'static str> {
    let (namespace, value) = s.split_once(':').unwrap_or(("minecraft", s));

    if !valid_chars(namespace, false) {
        return Err("identifier namespace must match [a-z0-9_.-]+");
    }

    if !valid_chars(value, true) {
        return Err("identifier value must match [a-z0-9_.-/]+");
    }

    Ok(format!("{namespace}:{value}"))
}

fn valid_chars(s: &str, allow_slash: bool) -> bool {
    !s.is_empty()
        && s.chars().all(|c| {
            matches!(c, 'a'..='z' | '0'..='9' | '_' | '.' | '-') || (allow_slash && c == '/')
        })
}
