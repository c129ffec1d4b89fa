use proc_macro::TokenStream;
use quote::quote;
use syn::DeriveInput;

use crate::derive_data::TabularDerive;

/// Provided for `#[derive(Tabular)]`.
pub(crate) fn match_tabular_impls(ast: &DeriveInput) -> TokenStream {
    let derive = match TabularDerive::from_input(ast) {
        Ok(val) => val,
        Err(err) => return err.into_compile_error().into(),
    };

    let impls = match &derive {
        TabularDerive::Struct(info) => super::impl_struct(info),
        TabularDerive::Enum(info) => super::impl_enum(info),
    };

    TokenStream::from(quote! {
        const _: () = {
            #impls
        };
    })
}
