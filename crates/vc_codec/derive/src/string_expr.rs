use proc_macro2::TokenStream;
use quote::{ToTokens, quote};
use syn::LitStr;
use syn::spanned::Spanned;

/// A string-valued expression in generated code.
#[derive(Clone)]
pub(crate) enum StringExpr {
    /// Known at compile time: a literal, or a macro such as `module_path!()`.
    Const(TokenStream),
    /// A `&'static str` computed at run time.
    Borrowed(TokenStream),
    /// A `String` computed at run time.
    Owned(TokenStream),
}

impl Default for StringExpr {
    fn default() -> Self {
        Self::Const("".to_token_stream())
    }
}

impl<T: ToString + Spanned> From<T> for StringExpr {
    fn from(value: T) -> Self {
        Self::Const(LitStr::new(&value.to_string(), value.span()).to_token_stream())
    }
}

impl StringExpr {
    pub fn from_lit(lit: &LitStr) -> Self {
        Self::Const(lit.to_token_stream())
    }

    pub fn from_text(text: &str) -> Self {
        Self::Const(text.to_token_stream())
    }

    fn is_const(&self) -> bool {
        matches!(self, Self::Const(_))
    }

    /// Returns tokens evaluating to a `&'static str`, or to a `&str`
    /// borrowed from a temporary for [`StringExpr::Owned`].
    pub fn into_borrowed(self) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => tokens,
            Self::Owned(owned) => quote! { &#owned as &str },
        }
    }

    /// Returns tokens evaluating to a `String`.
    pub fn into_owned(self, vc_codec_path: &syn::Path) -> TokenStream {
        match self {
            Self::Const(tokens) | Self::Borrowed(tokens) => {
                let macro_exports_ = crate::path::macro_exports_(vc_codec_path);
                quote! { #macro_exports_::ToOwned::to_owned(#tokens) }
            }
            Self::Owned(owned) => owned,
        }
    }

    /// Concatenates expressions.
    ///
    /// Constant parts only produce a `concat!`; anything else calls
    /// `vc_codec::impls::concat` at run time.
    pub fn from_iter<I: IntoIterator<Item = StringExpr>>(iter: I, vc_codec_path: &syn::Path) -> Self {
        let exprs: Vec<StringExpr> = iter.into_iter().collect();

        if exprs.is_empty() {
            return Self::default();
        }

        if exprs.iter().all(Self::is_const) {
            let parts = exprs.into_iter().map(Self::into_borrowed);
            Self::Const(quote! { ::core::concat!( #(#parts),* ) })
        } else {
            let macro_exports_ = crate::path::macro_exports_(vc_codec_path);
            let parts = exprs.into_iter().map(Self::into_borrowed);
            Self::Owned(quote! { #macro_exports_::concat(&[ #(#parts),* ]) })
        }
    }
}
