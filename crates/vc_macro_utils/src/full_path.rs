//! Fully qualified paths of prelude items.
//!
//! Generated code must not depend on the caller's prelude or on local items
//! shadowing it, so it spells out `::core::option::Option` and the like.
//!
//! ```
//! use quote::quote;
//! use vc_macro_utils::full_path::OptionFP;
//!
//! let tokens = quote!(#OptionFP::<u8>::None);
//! let expected = quote!(::core::option::Option::<u8>::None);
//! assert_eq!(tokens.to_string(), expected.to_string());
//! ```

use proc_macro2::TokenStream;
use quote::{ToTokens, quote};

macro_rules! define_full_path {
    ($($(#[$attr:meta])* $name:ident => $path:path;)*) => {$(
        $(#[$attr])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl ToTokens for $name {
            #[inline]
            fn to_tokens(&self, tokens: &mut TokenStream) {
                tokens.extend(quote!($path));
            }
        }
    )*};
}

define_full_path! {
    /// `::core::any::Any`
    AnyFP => ::core::any::Any;
    /// `::core::default::Default`
    DefaultFP => ::core::default::Default;
    /// `::core::option::Option`
    OptionFP => ::core::option::Option;
    /// `::core::result::Result`
    ResultFP => ::core::result::Result;
}

#[cfg(test)]
mod tests {
    use quote::ToTokens;

    use super::{AnyFP, DefaultFP, OptionFP, ResultFP};

    fn spelled(path: impl ToTokens) -> String {
        path.to_token_stream().to_string().replace(' ', "")
    }

    #[test]
    fn absolute_paths() {
        assert_eq!(spelled(AnyFP), "::core::any::Any");
        assert_eq!(spelled(DefaultFP), "::core::default::Default");
        assert_eq!(spelled(OptionFP), "::core::option::Option");
        assert_eq!(spelled(ResultFP), "::core::result::Result");
    }
}
